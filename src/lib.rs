pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::log_sink::LogSink;
pub use crate::config::toml_config::FormRules;
pub use crate::core::contact::{
    is_enter_submit_suppressed, is_valid_email, is_valid_state, validate_message,
    validate_message_default, validate_responsible_name, validate_responsible_name_default,
};
pub use crate::core::controller::SignupController;
pub use crate::core::phone::{format_phone, is_valid_phone, normalize_phone};
pub use crate::core::tax_id::{format_tax_id, is_valid_tax_id, normalize_tax_id};
pub use crate::core::validator::BrazilianValidator;
pub use crate::utils::error::{Result, SignupError};
