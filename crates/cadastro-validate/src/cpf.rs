//! CPF check digit validation.
//!
//! A CPF is an 11-digit national ID whose last two digits are check digits
//! computed over the preceding digits via weighted sum mod 11. Formatting
//! characters (dots, hyphen) are stripped before checking.

/// Reported when the stripped input does not have exactly 11 digits.
pub const MSG_CPF_LENGTH: &str = "CPF inválido. Deve conter 11 dígitos.";

/// Reported for repeated-digit sequences and check digit mismatches.
pub const MSG_CPF_INVALID: &str = "CPF inválido.";

/// Check a CPF value. Returns `None` when valid, `Some(message)` otherwise.
pub fn check(value: &str) -> Option<&'static str> {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return Some(MSG_CPF_LENGTH);
    }

    // A single digit repeated 11 times satisfies the checksum but is not a
    // valid ID (e.g. "11111111111").
    if digits.iter().all(|&digit| digit == digits[0]) {
        return Some(MSG_CPF_INVALID);
    }

    let first_ok = expected_check_digit(&digits[..9]) == digits[9];
    let second_ok = expected_check_digit(&digits[..10]) == digits[10];
    if !first_ok || !second_ok {
        return Some(MSG_CPF_INVALID);
    }
    None
}

/// True when `value` is a checksum-valid CPF.
pub fn is_valid(value: &str) -> bool {
    check(value).is_none()
}

/// Compute the check digit for a digit prefix.
///
/// Weights descend from `len + 1` down to 2: 10..2 over the first 9 digits
/// for the first check digit, 11..2 over the first 10 for the second.
fn expected_check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(idx, &digit)| digit * (top_weight - idx as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
