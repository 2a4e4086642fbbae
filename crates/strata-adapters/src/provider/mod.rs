//! Analysis provider adapters.
//!
//! Implementations of `strata_core::application::ports::AnalysisProvider`:
//!
//! - [`SimulatedProvider`]: deterministic keyword-driven stand-in for an
//!   LLM-backed analyzer. No network, no state; useful for demos and as the
//!   default "smart" mode.
//! - [`ScriptedProvider`]: replays canned responses, for tests.

pub mod scripted;
pub mod simulated;

pub use scripted::ScriptedProvider;
pub use simulated::SimulatedProvider;

use strata_core::application::ports::AnalysisProvider;

/// Resolve a provider by its configured name.
///
/// `None` (or `"none"`) means heuristic-only analysis. Unknown names are
/// rejected so a typo in the config does not silently disable the provider.
pub fn from_name(name: Option<&str>) -> Result<Option<Box<dyn AnalysisProvider>>, String> {
    match name {
        None | Some("none") | Some("") => Ok(None),
        Some("simulated") => Ok(Some(Box::new(SimulatedProvider::new()))),
        Some(other) => Err(format!(
            "unknown analysis provider '{other}' (expected 'simulated' or 'none')"
        )),
    }
}
