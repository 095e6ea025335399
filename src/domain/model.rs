use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameValidation {
    pub valid: bool,
    pub trimmed: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageValidation {
    pub valid: bool,
    pub length: usize,
    pub too_long: bool,
    pub too_short: bool,
}

/// Values collected by the sign-up modal, as typed (masked fields keep their punctuation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub institution_name: String,
    pub tax_id: String,
    pub state: Option<String>,
    pub city: String,
    pub institution_type: String,
    pub student_count: String,
    pub responsible_name: String,
    pub responsible_role: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub terms_accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: SignupForm,
    pub tax_id_digits: String,
    pub phone_digits: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    InstitutionName,
    TaxId,
    State,
    City,
    ResponsibleName,
    Email,
    Phone,
    Message,
    Terms,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::InstitutionName => "institution_name",
            FormField::TaxId => "tax_id",
            FormField::State => "state",
            FormField::City => "city",
            FormField::ResponsibleName => "responsible_name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
            FormField::Terms => "terms",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FormField,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    Open,
    #[default]
    Closed,
}

/// Blur-time status of a single field; `Empty` is left unflagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub submission: Submission,
    pub confirmation: &'static str,
}
