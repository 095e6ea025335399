use crate::domain::model::{MessageValidation, NameValidation, Submission};
use crate::utils::error::Result;

/// Field checks the sign-up controller depends on.
pub trait FormValidator: Send + Sync {
    fn format_tax_id(&self, input: &str) -> String;
    fn is_valid_tax_id(&self, input: &str) -> bool;
    fn format_phone(&self, input: &str) -> String;
    fn is_valid_phone(&self, input: &str) -> bool;
    fn is_valid_email(&self, input: &str) -> bool;
    fn validate_name(&self, input: &str) -> NameValidation;
    fn is_valid_state(&self, input: Option<&str>) -> bool;
    fn validate_message(&self, input: &str) -> MessageValidation;
    fn requires_terms(&self) -> bool;
}

/// Where an accepted submission goes.
pub trait SubmissionSink: Send + Sync {
    fn deliver(&self, submission: &Submission) -> Result<()>;
}
