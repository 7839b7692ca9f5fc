//! Value types produced by the evaluator.

use std::fmt;
use thiserror::Error;

/// Highest score a password can reach (one point per criterion).
pub const MAX_SCORE: u8 = 5;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Score {0} is out of range (0..=5)")]
    OutOfRange(u8),
}

/// Number of satisfied strength criteria, always in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const ZERO: PasswordScore = PasswordScore(0);

    /// Builds a score from a count of satisfied criteria, capped at `MAX_SCORE`.
    pub(crate) fn saturating_from_count(count: usize) -> Self {
        PasswordScore(count.min(MAX_SCORE as usize) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Label tier for this score.
    pub fn label(&self) -> StrengthLabel {
        match self.0 {
            0 => StrengthLabel::None,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Fair,
            3 => StrengthLabel::Good,
            4 => StrengthLabel::Strong,
            // constructors reject anything above MAX_SCORE
            _ => StrengthLabel::VeryStrong,
        }
    }

    /// Remediation hint, only given for the two lowest non-empty tiers.
    pub fn hint(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("Try adding numbers and special characters"),
            2 => Some("Try adding uppercase letters and special characters"),
            _ => None,
        }
    }
}

impl TryFrom<u8> for PasswordScore {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_SCORE {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(PasswordScore(value))
    }
}

impl From<PasswordScore> for u8 {
    fn from(score: PasswordScore) -> Self {
        score.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Human-readable strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StrengthLabel {
    /// Nothing to display.
    #[default]
    None,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single evaluation.
///
/// `label` and `hint` are always derived from `score`; build one with
/// [`PasswordAssessment::from_score`] to keep them consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PasswordAssessment {
    pub score: PasswordScore,
    pub label: StrengthLabel,
    pub hint: Option<&'static str>,
}

impl PasswordAssessment {
    pub fn from_score(score: PasswordScore) -> Self {
        Self {
            score,
            label: score.label(),
            hint: score.hint(),
        }
    }

    /// `true` when there is nothing for a meter to show.
    pub fn is_empty(&self) -> bool {
        self.label == StrengthLabel::None
    }

    /// How many of the five meter segments should be highlighted.
    pub fn filled_segments(&self) -> usize {
        self.score.value() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_try_from_in_range() {
        for v in 0..=MAX_SCORE {
            let score = PasswordScore::try_from(v).unwrap();
            assert_eq!(score.value(), v);
        }
    }

    #[test]
    fn test_score_try_from_out_of_range() {
        assert_eq!(PasswordScore::try_from(6), Err(ScoreError::OutOfRange(6)));
        assert_eq!(
            PasswordScore::try_from(u8::MAX),
            Err(ScoreError::OutOfRange(u8::MAX))
        );
    }

    #[test]
    fn test_label_table() {
        let expected = [
            StrengthLabel::None,
            StrengthLabel::Weak,
            StrengthLabel::Fair,
            StrengthLabel::Good,
            StrengthLabel::Strong,
            StrengthLabel::VeryStrong,
        ];
        for (v, label) in expected.into_iter().enumerate() {
            let score = PasswordScore::try_from(v as u8).unwrap();
            assert_eq!(score.label(), label, "score {}", v);
        }
    }

    #[test]
    fn test_hint_only_for_low_scores() {
        let with_hint: Vec<u8> = (0..=MAX_SCORE)
            .filter(|&v| PasswordScore::try_from(v).unwrap().hint().is_some())
            .collect();
        assert_eq!(with_hint, vec![1, 2]);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::None.to_string(), "");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
        assert_eq!(PasswordScore::try_from(3).unwrap().to_string(), "3/5");
    }

    #[test]
    fn test_assessment_from_score() {
        let assessment = PasswordAssessment::from_score(PasswordScore::try_from(2).unwrap());
        assert_eq!(assessment.label, StrengthLabel::Fair);
        assert_eq!(
            assessment.hint,
            Some("Try adding uppercase letters and special characters")
        );
        assert_eq!(assessment.filled_segments(), 2);
        assert!(!assessment.is_empty());
    }

    #[test]
    fn test_default_assessment_is_empty() {
        let assessment = PasswordAssessment::default();
        assert!(assessment.is_empty());
        assert_eq!(assessment, PasswordAssessment::from_score(PasswordScore::ZERO));
    }
}
