pub mod contact;
pub mod controller;
pub mod phone;
pub mod tax_id;
pub mod validator;

pub use crate::domain::model::{MessageValidation, NameValidation, SignupForm, Submission};
pub use crate::domain::ports::{FormValidator, SubmissionSink};
pub use crate::utils::error::Result;
