use crate::domain::model::FieldIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Form has {} invalid field(s)", .0.len())]
    InvalidForm(Vec<FieldIssue>),

    #[error("Sign-up modal is not open")]
    ModalClosed,

    #[error("Submission delivery failed: {message}")]
    DeliveryError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Form,
    Delivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SignupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SignupError::IoError(_) => ErrorCategory::Io,
            SignupError::TomlError(_)
            | SignupError::SerializationError(_)
            | SignupError::ConfigValidationError { .. }
            | SignupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SignupError::InvalidForm(_) | SignupError::ModalClosed => ErrorCategory::Form,
            SignupError::DeliveryError { .. } => ErrorCategory::Delivery,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SignupError::ModalClosed => ErrorSeverity::Low,
            SignupError::InvalidForm(_) => ErrorSeverity::Medium,
            SignupError::TomlError(_)
            | SignupError::SerializationError(_)
            | SignupError::ConfigValidationError { .. }
            | SignupError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SignupError::IoError(_) | SignupError::DeliveryError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the person filling the form.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SignupError::InvalidForm(issues) => match issues.first() {
                Some(issue) => issue.message.clone(),
                None => "Formulário inválido.".to_string(),
            },
            SignupError::ModalClosed => {
                "Abra o formulário de inscrição antes de enviar.".to_string()
            }
            SignupError::IoError(e) => format!("Não foi possível ler o arquivo: {}", e),
            SignupError::TomlError(_) | SignupError::SerializationError(_) => {
                "O arquivo informado não está em um formato válido.".to_string()
            }
            SignupError::ConfigValidationError { field, .. }
            | SignupError::InvalidConfigValueError { field, .. } => {
                format!("Configuração inválida em '{}'.", field)
            }
            SignupError::DeliveryError { .. } => {
                "Não foi possível enviar a solicitação. Tente novamente.".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Configuration => "Fix the TOML file and run again",
            ErrorCategory::Form => "Correct the highlighted fields and submit again",
            ErrorCategory::Delivery => "Retry the submission",
        }
    }
}

pub type Result<T> = std::result::Result<T, SignupError>;
