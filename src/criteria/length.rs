//! Length criteria - minimum and long length thresholds.

pub const MIN_LENGTH: usize = 8;
pub const LONG_LENGTH: usize = 12;

/// Checks if the password has at least `threshold` characters.
///
/// Length is counted in `char`s, so multi-byte characters count once.
pub fn length_criterion(password: &str, threshold: usize) -> bool {
    password.chars().count() >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_criterion_too_short() {
        assert!(!length_criterion("Short1!", MIN_LENGTH));
    }

    #[test]
    fn test_length_criterion_exactly_minimum() {
        assert!(length_criterion("12345678", MIN_LENGTH));
        assert!(!length_criterion("12345678", LONG_LENGTH));
    }

    #[test]
    fn test_length_criterion_exactly_long() {
        assert!(length_criterion("123456789012", LONG_LENGTH));
        assert!(!length_criterion("12345678901", LONG_LENGTH));
    }

    #[test]
    fn test_length_criterion_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        assert!(!length_criterion("ééééééé", MIN_LENGTH));
        assert!(length_criterion("éééééééé", MIN_LENGTH));
    }
}
