//! Password strength meter library
//!
//! Scores a password against five independent criteria and maps the
//! score to a strength label and an optional remediation hint, ready to
//! drive a five-segment meter.
//!
//! # Criteria
//!
//! One point each for: at least 8 characters, at least 12 characters,
//! an uppercase ASCII letter, an ASCII digit, and a character that is
//! neither an ASCII letter nor an ASCII digit.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DEBOUNCE_MS`: Delay before an async evaluation runs
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, StrengthLabel};
//!
//! let assessment = evaluate("Abcdefgh1");
//!
//! assert_eq!(assessment.score.value(), 3);
//! assert_eq!(assessment.label, StrengthLabel::Good);
//! assert_eq!(assessment.hint, None);
//! ```

// Internal modules
mod config;
mod criteria;
mod evaluator;
mod types;

// Public API
pub use config::{get_debounce_delay, ConfigError, DEBOUNCE_ENV_VAR, DEFAULT_DEBOUNCE};
pub use criteria::{satisfied_criteria, Criterion};
pub use evaluator::{evaluate, evaluate_password_strength};
pub use types::{PasswordAssessment, PasswordScore, ScoreError, StrengthLabel, MAX_SCORE};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
