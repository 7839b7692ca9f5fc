//! Password strength criteria
//!
//! Each criterion is an independent yes/no check worth one point.

mod length;
mod variety;

use length::{length_criterion, LONG_LENGTH, MIN_LENGTH};
use variety::{has_ascii_digit, has_ascii_uppercase, has_special};

/// One of the five binary strength tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// At least 8 characters.
    MinLength,
    /// At least 12 characters. Stacks with `MinLength`.
    LongLength,
    Uppercase,
    Digit,
    /// Anything that is not an ASCII letter or digit, non-ASCII included.
    Special,
}

impl Criterion {
    /// All criteria, in scoring order.
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::LongLength,
        Criterion::Uppercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            Criterion::MinLength => length_criterion(password, MIN_LENGTH),
            Criterion::LongLength => length_criterion(password, LONG_LENGTH),
            Criterion::Uppercase => has_ascii_uppercase(password),
            Criterion::Digit => has_ascii_digit(password),
            Criterion::Special => has_special(password),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Criterion::MinLength => "At least 8 characters",
            Criterion::LongLength => "At least 12 characters",
            Criterion::Uppercase => "An uppercase letter",
            Criterion::Digit => "A number",
            Criterion::Special => "A special character",
        }
    }
}

/// Returns the criteria the password satisfies, in scoring order.
pub fn satisfied_criteria(password: &str) -> Vec<Criterion> {
    Criterion::ALL
        .into_iter()
        .filter(|c| c.is_satisfied_by(password))
        .collect()
}
