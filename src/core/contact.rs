use crate::domain::model::{MessageValidation, NameValidation};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_NAME_MIN_LENGTH: usize = 3;
pub const DEFAULT_MESSAGE_MIN_LENGTH: usize = 0;
pub const DEFAULT_MESSAGE_MAX_LENGTH: usize = 500;

// one '@', a dot in the domain, no whitespace; `local+tag@` allowed
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+(\+[^\s@]+)?@[^\s@]+\.[^\s@]+$").expect("Failed to init regexp")
});

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Trims `input` and checks the trimmed name has at least `min_length` characters.
pub fn validate_responsible_name(input: &str, min_length: usize) -> NameValidation {
    let trimmed = input.trim();
    NameValidation {
        valid: trimmed.chars().count() >= min_length,
        trimmed: trimmed.to_string(),
    }
}

pub fn validate_responsible_name_default(input: &str) -> NameValidation {
    validate_responsible_name(input, DEFAULT_NAME_MIN_LENGTH)
}

/// Any selected value counts; state codes are not checked against a list.
pub fn is_valid_state(input: Option<&str>) -> bool {
    input.is_some_and(|state| !state.is_empty())
}

pub fn validate_message(input: &str, min_length: usize, max_length: usize) -> MessageValidation {
    let length = input.chars().count();
    MessageValidation {
        valid: length >= min_length && length <= max_length,
        length,
        too_long: length > max_length,
        too_short: length < min_length,
    }
}

pub fn validate_message_default(input: &str) -> MessageValidation {
    validate_message(input, DEFAULT_MESSAGE_MIN_LENGTH, DEFAULT_MESSAGE_MAX_LENGTH)
}

/// Enter submits nothing unless it is typed inside the message textarea.
pub fn is_enter_submit_suppressed(key: &str, target_is_textarea: bool) -> bool {
    key == "Enter" && !target_is_textarea
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_plus_addressing_and_subdomains() {
        assert!(is_valid_email("contato+teste@mail.example.com"));
        assert!(is_valid_email("contato+ksa@exemplo.com.br"));
        assert!(is_valid_email("ana@escola.com"));
    }

    #[test]
    fn test_email_rejections() {
        assert!(!is_valid_email("usuario@"));
        assert!(!is_valid_email("usuario example.com"));
        assert!(!is_valid_email("usuario@example"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_name_is_trimmed_before_length_check() {
        assert_eq!(
            validate_responsible_name("   Jo   ", 3),
            NameValidation {
                valid: false,
                trimmed: "Jo".to_string()
            }
        );
        assert_eq!(
            validate_responsible_name("  Ana ", 2),
            NameValidation {
                valid: true,
                trimmed: "Ana".to_string()
            }
        );
        assert!(validate_responsible_name_default("Ana").valid);
        assert!(!validate_responsible_name_default("   ").valid);
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(validate_responsible_name("Zé", 2).valid);
        assert!(!validate_responsible_name("Zé", 3).valid);
    }

    #[test]
    fn test_state_selection() {
        assert!(!is_valid_state(Some("")));
        assert!(!is_valid_state(None));
        assert!(is_valid_state(Some("SP")));
        assert!(is_valid_state(Some("anything")));
    }

    #[test]
    fn test_message_length_limits() {
        let at_limit = validate_message_default(&"a".repeat(500));
        assert!(at_limit.valid);
        assert!(!at_limit.too_long);

        let over = validate_message_default(&"a".repeat(501));
        assert!(!over.valid);
        assert!(over.too_long);
        assert_eq!(over.length, 501);

        let short = validate_message("oi", 5, 500);
        assert!(!short.valid);
        assert!(short.too_short);
        assert!(!short.too_long);
    }

    #[test]
    fn test_empty_message_is_valid_by_default() {
        let empty = validate_message_default("");
        assert!(empty.valid);
        assert_eq!(empty.length, 0);
    }

    #[test]
    fn test_enter_key_suppression() {
        assert!(is_enter_submit_suppressed("Enter", false));
        assert!(!is_enter_submit_suppressed("Enter", true));
        assert!(!is_enter_submit_suppressed("a", false));
    }
}
