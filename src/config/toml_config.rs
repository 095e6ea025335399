use crate::core::contact::{
    DEFAULT_MESSAGE_MAX_LENGTH, DEFAULT_MESSAGE_MIN_LENGTH, DEFAULT_NAME_MIN_LENGTH,
};
use crate::domain::model::SignupForm;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const MAX_MESSAGE_LIMIT: usize = 5000;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Failed to init regexp"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub name: NameRules,
    pub message: MessageRules,
    pub submission: SubmissionRules,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRules {
    pub min_length: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_NAME_MIN_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageRules {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for MessageRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MESSAGE_MIN_LENGTH,
            max_length: DEFAULT_MESSAGE_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionRules {
    pub require_terms: bool,
}

impl Default for SubmissionRules {
    fn default() -> Self {
        Self {
            require_terms: true,
        }
    }
}

impl FormRules {
    /// Loads rules from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number("name.min_length", self.name.min_length, 1)?;
        validation::validate_range(
            "message.max_length",
            self.message.max_length,
            1,
            MAX_MESSAGE_LIMIT,
        )?;
        validation::validate_limits("message", self.message.min_length, self.message.max_length)?;
        Ok(())
    }
}

impl Validate for FormRules {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// Reads a filled-in form from a TOML file; missing keys stay empty.
pub fn load_form<P: AsRef<Path>>(path: P) -> Result<SignupForm> {
    let path_str = path.as_ref().to_string_lossy();
    validation::validate_path("form", &path_str)?;

    let content = std::fs::read_to_string(&path)?;
    parse_form(&content)
}

pub fn parse_form(content: &str) -> Result<SignupForm> {
    Ok(toml::from_str(content)?)
}

/// Replaces `${VAR}` with the environment value; unknown variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}
