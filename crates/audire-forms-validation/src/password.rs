//! Password validation functions

/// Confirmation check: both values must be identical.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

/// Strong password: 8+ chars with an ASCII uppercase letter, an ASCII
/// lowercase letter, a digit and a special character. Special means anything
/// outside `[A-Za-z0-9]`, so `_` and non-ASCII letters such as `é` count.
pub fn validate_strong(password: &str) -> Result<(), String> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if !has_uppercase {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    if !has_lowercase {
        return Err("Password must contain at least one lowercase letter".to_string());
    }
    if !has_digit {
        return Err("Password must contain at least one digit".to_string());
    }
    if !has_special {
        return Err("Password must contain at least one special character".to_string());
    }

    Ok(())
}
