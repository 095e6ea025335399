use ksa_signup::{
    format_phone, format_tax_id, is_valid_email, is_valid_phone, is_valid_state, validate_message,
    validate_message_default, validate_responsible_name,
};

#[test]
fn test_phone_masks() {
    assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
    assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    assert_eq!(format_phone("11912345678"), "(11) 91234-5678");
}

#[test]
fn test_phone_validity_by_digit_count() {
    for (input, expected) in [
        ("113333444", false),
        ("1133334444", true),
        ("11987654321", true),
        ("119876543210", false),
        ("(11) 3333-4444", true),
    ] {
        assert_eq!(is_valid_phone(input), expected, "input {}", input);
    }
}

#[test]
fn test_masked_phone_stays_valid() {
    for digits in ["1133334444", "11987654321"] {
        assert!(is_valid_phone(&format_phone(digits)));
    }
}

#[test]
fn test_email_vectors() {
    assert!(is_valid_email("contato+teste@mail.example.com"));
    assert!(!is_valid_email("usuario@"));
    assert!(!is_valid_email("usuario example.com"));
    assert!(!is_valid_email(" ana@escola.com"));
}

#[test]
fn test_responsible_name() {
    let short = validate_responsible_name("   Jo   ", 3);
    assert!(!short.valid);
    assert_eq!(short.trimmed, "Jo");

    let ok = validate_responsible_name("  Ana ", 2);
    assert!(ok.valid);
    assert_eq!(ok.trimmed, "Ana");
}

#[test]
fn test_state_required() {
    assert!(!is_valid_state(Some("")));
    assert!(!is_valid_state(None));
    assert!(is_valid_state(Some("RJ")));
}

#[test]
fn test_message_limits() {
    let at_limit = validate_message_default(&"a".repeat(500));
    assert!(at_limit.valid);
    assert!(!at_limit.too_long);

    let over = validate_message(&"a".repeat(501), 0, 500);
    assert!(!over.valid);
    assert!(over.too_long);
    assert_eq!(over.length, 501);

    let accented = validate_message(&"ç".repeat(500), 0, 500);
    assert!(accented.valid);
    assert_eq!(accented.length, 500);
}

#[test]
fn test_letters_typed_into_masked_fields_are_stripped() {
    assert_eq!(format_phone("FONE-TESTE"), "");
    assert_eq!(format_phone("11a9b8c7d6e5f4g3h2i1"), "(11) 98765-4321");

    assert_eq!(format_tax_id("CNPJ-TESTE"), "");
    let masked = format_tax_id("45a723b174c0001d10");
    assert_eq!(masked, "45.723.174/0001-10");
    assert!(!masked.chars().any(|c| c.is_alphabetic()));
}
