//! Application layer errors.
//!
//! These errors represent failures in orchestration, not analysis outcomes.
//! Analysis findings (violations, low confidence) are data on the result
//! types; domain rule failures are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An external analysis provider could not be reached or refused.
    ///
    /// The analysis service swallows this (provider failures are non-fatal);
    /// it only propagates from direct provider calls.
    #[error("analysis provider '{provider}' failed: {reason}")]
    ProviderUnavailable {
        provider: &'static str,
        reason: String,
    },

    /// A provider returned something the service cannot merge.
    #[error("provider result rejected: {reason}")]
    InvalidProviderResult { reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProviderUnavailable { provider, .. } => vec![
                format!("The '{}' analysis provider is unavailable", provider),
                "Analysis continues with heuristic results".into(),
                "Disable the provider: strata config set analysis.provider none".into(),
            ],
            Self::InvalidProviderResult { reason } => vec![
                format!("Provider result was rejected: {}", reason),
                "Heuristic results are used instead".into(),
            ],
            Self::ValidationFailed(msg) => vec![
                format!("Validation failed: {}", msg),
                "Check the analysis input and retry".into(),
            ],
        }
    }

    /// Error category for display/styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProviderUnavailable { .. } => ErrorCategory::Configuration,
            Self::InvalidProviderResult { .. } => ErrorCategory::Internal,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_failure_suggests_disabling_it() {
        let err = ApplicationError::ProviderUnavailable {
            provider: "simulated",
            reason: "boom".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("config set")));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
