//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::Criterion;
use crate::types::{PasswordAssessment, PasswordScore};

/// Evaluates a password and returns its assessment.
///
/// Never fails. An empty password yields an empty assessment (score 0, no
/// label, no hint); otherwise every satisfied criterion adds one point.
pub fn evaluate(password: &str) -> PasswordAssessment {
    if password.is_empty() {
        return PasswordAssessment::default();
    }

    let mut satisfied = 0;
    for criterion in Criterion::ALL {
        if criterion.is_satisfied_by(password) {
            satisfied += 1;
        }
    }

    let assessment = PasswordAssessment::from_score(PasswordScore::saturating_from_count(satisfied));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = assessment.score.value(),
        label = assessment.label.as_str(),
        "password evaluated"
    );

    assessment
}

/// Same as [`evaluate`] for passwords held in a `SecretString`.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordAssessment {
    evaluate(password.expose_secret())
}

/// Async version that waits out the debounce delay, then sends the
/// assessment via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAssessment>,
) {
    let delay = match crate::config::get_debounce_delay() {
        Ok(delay) => delay,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}, using default", _e);
            crate::config::DEFAULT_DEBOUNCE
        }
    };

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start in {:?}...", delay);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let assessment = evaluate_password_strength(password);

    if let Err(_e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment: {}", _e);
    }
}
