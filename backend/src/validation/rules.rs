//! Common validation rules shared across request payloads.

use validator::ValidationError;

const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 16;

/// Validates password strength.
///
/// Requirements:
/// - 8-16 characters, no whitespace
/// - at least one digit, one lowercase, one uppercase and one symbol
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();
    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
        return Err(ValidationError::new("password_invalid_length"));
    }
    if password.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("password_contains_whitespace"));
    }

    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());
    if !(has_digit && has_lower && has_upper && has_symbol) {
        return Err(ValidationError::new("password_too_weak"));
    }

    Ok(())
}
