//! Scripted provider for tests.
//!
//! Replays a fixed queue of responses, recording what it was asked. Lives in
//! the adapters crate (not behind `#[cfg(test)]`) so downstream crates can
//! drive their own provider-merge tests with it.

use std::sync::Mutex;

use strata_core::application::ApplicationError;
use strata_core::application::ports::{AnalysisProvider, PartialAnalysis, ProviderContext};
use strata_core::error::{StrataError, StrataResult};

/// Replays canned [`PartialAnalysis`] responses in order, then fails.
pub struct ScriptedProvider {
    responses: Mutex<Vec<PartialAnalysis>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    /// Provider that answers with `responses`, first element first.
    pub fn new(responses: Vec<PartialAnalysis>) -> Self {
        let mut reversed = responses;
        reversed.reverse();
        Self {
            responses: Mutex::new(reversed),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider whose every call fails, for exercising the fallback path.
    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    /// Build the script from a JSON array of partial analyses, as captured
    /// from a real provider session.
    pub fn from_json(json: &str) -> StrataResult<Self> {
        let responses: Vec<PartialAnalysis> =
            serde_json::from_str(json).map_err(|e| StrataError::Configuration {
                message: format!("invalid provider script: {e}"),
            })?;
        Ok(Self::new(responses))
    }

    /// Descriptions this provider has been asked about, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl AnalysisProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn analyze_description(
        &self,
        description: &str,
        _context: Option<&ProviderContext>,
    ) -> StrataResult<PartialAnalysis> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(description.to_string());

        self.responses
            .lock()
            .expect("responses lock")
            .pop()
            .ok_or_else(|| {
                StrataError::Application(ApplicationError::ProviderUnavailable {
                    provider: "scripted",
                    reason: "script exhausted".into(),
                })
            })
    }
}
