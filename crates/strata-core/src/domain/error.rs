// ============================================================================
// domain/error.rs - DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Note the deliberate asymmetry with analysis results: low-confidence
/// classification, hierarchy violations, and lint findings are *data*, not
/// errors. Only structurally invalid input (an unknown layer name) or a
/// broken taxonomy surfaces here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unknown layer: {value}")]
    UnknownLayer { value: String },

    #[error("Invalid analysis input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // Taxonomy Errors (internal — the registry is hand-authored)
    // ========================================================================
    #[error("Invalid layer taxonomy: {0}")]
    InvalidTaxonomy(String),

    #[error("Layer taxonomy is empty")]
    EmptyTaxonomy,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownLayer { value } => vec![
                format!("'{}' is not a recognised layer", value),
                "Valid layers:".into(),
                "  atom, molecule, organism, template, feature, layout,".into(),
                "  particle, model, entity, util, gateway, repository".into(),
                "Try: strata layers".into(),
            ],
            Self::InvalidInput(msg) => vec![
                "Check the analysis input".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidTaxonomy(_) | Self::EmptyTaxonomy => vec![
                "The layer taxonomy is inconsistent".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownLayer { .. } | Self::InvalidInput(_) => ErrorCategory::Validation,
            Self::InvalidTaxonomy(_) | Self::EmptyTaxonomy => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_layer_suggestions_list_valid_layers() {
        let err = DomainError::UnknownLayer {
            value: "quark".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("atom")));
        assert!(err.suggestions().iter().any(|s| s.contains("repository")));
    }

    #[test]
    fn unknown_layer_is_a_validation_error() {
        let err = DomainError::UnknownLayer { value: "x".into() };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn taxonomy_errors_are_internal() {
        assert_eq!(DomainError::EmptyTaxonomy.category(), ErrorCategory::Internal);
    }
}
