//! Character variety criteria - uppercase, digits, special characters.

pub fn has_ascii_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_ascii_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Any character that is neither an ASCII letter nor an ASCII digit.
///
/// Non-ASCII letters such as `é` or `Ж` count as special.
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
