//! CNPJ (Brazilian legal-entity tax ID) normalization, masking and check-digit validation.

use regex::Regex;
use std::sync::LazyLock;

pub const TAX_ID_LENGTH: usize = 14;

const FIRST_CHECK_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

static ROOT_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d)").expect("Failed to init regexp"));
static SECOND_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\.(\d{3})(\d)").expect("Failed to init regexp"));
static BRANCH_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\d{3})(\d)").expect("Failed to init regexp"));
static CHECK_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})(\d)").expect("Failed to init regexp"));

/// Keeps only the ASCII digits of `input`.
pub fn normalize_tax_id(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Applies the `NN.NNN.NNN/NNNN-NN` mask to whatever digits are present.
///
/// Partial input is punctuated as far as it goes, so this can run on every keystroke.
/// Digits past the fourteenth are appended without punctuation.
pub fn format_tax_id(input: &str) -> String {
    let digits = normalize_tax_id(input);
    let (head, rest) = digits.split_at(digits.len().min(TAX_ID_LENGTH));

    let masked = ROOT_DOT.replace(head, "${1}.${2}");
    let masked = SECOND_DOT.replace(&masked, "${1}.${2}.${3}");
    let masked = BRANCH_SLASH.replace(&masked, ".${1}/${2}");
    let masked = CHECK_DASH.replace(&masked, "${1}-${2}");

    let mut out = masked.into_owned();
    out.push_str(rest);
    out
}

pub fn is_valid_tax_id(input: &str) -> bool {
    let digits: Vec<u32> = normalize_tax_id(input)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != TAX_ID_LENGTH {
        return false;
    }

    // 00.000.000/0000-00, 11.111.111/1111-11, ... pass the checksum but are not issued
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..12], &FIRST_CHECK_WEIGHTS) == digits[12]
        && check_digit(&digits[..13], &SECOND_CHECK_WEIGHTS) == digits[13]
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
