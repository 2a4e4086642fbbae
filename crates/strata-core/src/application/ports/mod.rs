//! Application ports (traits) for external dependencies.
//!
//! The core has exactly one outside dependency worth abstracting: an
//! external description analyzer (in practice an LLM-backed service; in
//! tests a script). It is modelled as a capability the [`AnalysisService`]
//! may or may not hold — `Option<Box<dyn AnalysisProvider>>` — never as an
//! inheritance hierarchy. Absence and failure are equivalent: both land on
//! the deterministic heuristic path.
//!
//! [`AnalysisService`]: crate::application::AnalysisService

use serde::{Deserialize, Serialize};

use crate::domain::LayerId;
use crate::error::StrataResult;

#[cfg(test)]
use mockall::automock;

/// Extra signal passed along to a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderContext {
    /// Layer the caller already settled on, if any.
    pub layer: Option<LayerId>,
    /// Caller-supplied feature tags.
    pub features: Vec<String>,
}

/// What an external analyzer managed to work out. Every field is optional;
/// the service merges present fields over its own heuristic result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialAnalysis {
    pub layer: Option<LayerId>,
    pub confidence: Option<f64>,
    pub concepts: Vec<String>,
    pub suggested_name: Option<String>,
    pub reasoning: Option<String>,
}

/// Port for external description analysis.
///
/// Implemented by:
/// - `strata_adapters::provider::SimulatedProvider` (deterministic stand-in)
/// - `strata_adapters::provider::ScriptedProvider` (testing)
///
/// ## Contract
///
/// Implementations may fail — the service treats any error as non-fatal,
/// logs it, and continues with heuristic results. A provider must never be
/// required for analysis to complete.
#[cfg_attr(test, automock)]
pub trait AnalysisProvider: Send + Sync {
    /// Human-readable provider name, for logs.
    fn name(&self) -> &'static str;

    /// Analyze a raw component description.
    fn analyze_description<'a>(
        &self,
        description: &str,
        context: Option<&'a ProviderContext>,
    ) -> StrataResult<PartialAnalysis>;
}
