use crate::config::toml_config::FormRules;
use crate::core::{contact, phone, tax_id};
use crate::domain::model::{MessageValidation, NameValidation};
use crate::domain::ports::FormValidator;

/// Brazilian-format checks with the limits taken from [`FormRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrazilianValidator {
    name_min_length: usize,
    message_min_length: usize,
    message_max_length: usize,
    require_terms: bool,
}

impl BrazilianValidator {
    pub fn new(rules: &FormRules) -> Self {
        Self {
            name_min_length: rules.name.min_length,
            message_min_length: rules.message.min_length,
            message_max_length: rules.message.max_length,
            require_terms: rules.submission.require_terms,
        }
    }

    pub fn message_max_length(&self) -> usize {
        self.message_max_length
    }

    pub fn name_min_length(&self) -> usize {
        self.name_min_length
    }
}

impl Default for BrazilianValidator {
    fn default() -> Self {
        Self::new(&FormRules::default())
    }
}

impl FormValidator for BrazilianValidator {
    fn format_tax_id(&self, input: &str) -> String {
        tax_id::format_tax_id(input)
    }

    fn is_valid_tax_id(&self, input: &str) -> bool {
        tax_id::is_valid_tax_id(input)
    }

    fn format_phone(&self, input: &str) -> String {
        phone::format_phone(input)
    }

    fn is_valid_phone(&self, input: &str) -> bool {
        phone::is_valid_phone(input)
    }

    fn is_valid_email(&self, input: &str) -> bool {
        contact::is_valid_email(input)
    }

    fn validate_name(&self, input: &str) -> NameValidation {
        contact::validate_responsible_name(input, self.name_min_length)
    }

    fn is_valid_state(&self, input: Option<&str>) -> bool {
        contact::is_valid_state(input)
    }

    fn validate_message(&self, input: &str) -> MessageValidation {
        contact::validate_message(input, self.message_min_length, self.message_max_length)
    }

    fn requires_terms(&self) -> bool {
        self.require_terms
    }
}
