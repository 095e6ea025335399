//! Brazilian phone masks: `(NN) NNNN-NNNN` for landlines, `(NN) NNNNN-NNNN` for mobiles.

use regex::Regex;
use std::sync::LazyLock;

pub const LANDLINE_LENGTH: usize = 10;
pub const MOBILE_LENGTH: usize = 11;

static AREA_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d)").expect("Failed to init regexp"));
static LANDLINE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})(\d)").expect("Failed to init regexp"));
static MOBILE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{5})(\d)").expect("Failed to init regexp"));

pub fn normalize_phone(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Masks the digits of `input` as they are typed.
///
/// Up to ten digits use the landline layout, exactly eleven switch to the
/// ninth-digit mobile layout. Anything after the eleventh digit is dropped.
pub fn format_phone(input: &str) -> String {
    let mut digits = normalize_phone(input);
    digits.truncate(MOBILE_LENGTH);

    let dash = if digits.len() <= LANDLINE_LENGTH {
        &*LANDLINE_DASH
    } else {
        &*MOBILE_DASH
    };

    let masked = AREA_CODE.replace(&digits, "(${1}) ${2}");
    dash.replace(&masked, "${1}-${2}").into_owned()
}

pub fn is_valid_phone(input: &str) -> bool {
    matches!(normalize_phone(input).len(), LANDLINE_LENGTH | MOBILE_LENGTH)
}
