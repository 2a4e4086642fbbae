//! Analysis Service - main application orchestrator.
//!
//! Coordinates the full analysis workflow for one component description:
//! 1. Classify the description into a layer (unless the caller forced one)
//! 2. Derive and validate the layer's dependency set
//! 3. Suggest a component name
//!
//! An optional [`AnalysisProvider`] can refine the heuristic result. The
//! provider is strictly best-effort: absence, slowness, or failure all leave
//! the heuristic outcome intact, and nothing a provider returns is trusted
//! without validation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{AnalysisProvider, PartialAnalysis, ProviderContext},
    domain::{
        ClassificationResult, DependencySet, LayerId, NamingContext, NamingSuggestion, taxonomy,
        analyze_dependencies, classify, suggest_name,
    },
};

/// Input for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free-text component description, any language the taxonomy knows.
    pub description: String,
    /// Feature tags (`"validation"`, `"state-management"`, ...).
    pub features: Vec<String>,
    /// Skip classification and use this layer directly.
    pub layer: Option<LayerId>,
    /// Naming hints.
    pub naming: NamingContext,
}

impl AnalysisRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Everything downstream generation needs to know about one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentAnalysis {
    /// The layer the rest of the analysis was computed for.
    pub layer: LayerId,
    pub classification: ClassificationResult,
    pub dependencies: DependencySet,
    pub naming: NamingSuggestion,
    /// Name of the provider whose result was merged in, if any.
    pub provider: Option<&'static str>,
}

/// Main analysis service.
///
/// Stateless apart from the optional provider; safe to share and call
/// concurrently.
pub struct AnalysisService {
    provider: Option<Box<dyn AnalysisProvider>>,
}

impl AnalysisService {
    /// Heuristic-only service. This is the zero-dependency default.
    pub fn new() -> Self {
        Self { provider: None }
    }

    /// Service with an external provider merged over the heuristics.
    pub fn with_provider(provider: Box<dyn AnalysisProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Run the full analysis pipeline for one request.
    #[instrument(skip_all, fields(layer = ?request.layer))]
    pub fn analyze(&self, request: &AnalysisRequest) -> ComponentAnalysis {
        let classification = classify(&request.description, &request.features);

        let external = self.consult_provider(request);
        let provider_name = external.as_ref().map(|_| self.provider_name());

        // Layer precedence: explicit request > validated provider > heuristic.
        let layer = request
            .layer
            .or_else(|| external.as_ref().and_then(|e| e.layer))
            .unwrap_or(classification.primary.layer);

        // Provider concepts strengthen dependency detection.
        let mut features = request.features.clone();
        if let Some(external) = &external {
            features.extend(external.concepts.iter().cloned());
        }

        let dependencies = analyze_dependencies(&request.description, layer, &features);

        let mut naming = suggest_name(&request.description, layer, Some(&request.naming));
        if let Some(name) = external.as_ref().and_then(|e| e.suggested_name.as_deref()) {
            merge_suggested_name(&mut naming, layer, name);
        }

        info!(
            layer = %layer,
            confidence = classification.confidence,
            name = %naming.primary,
            "component analysis complete"
        );

        ComponentAnalysis {
            layer,
            classification,
            dependencies,
            naming,
            provider: provider_name,
        }
    }

    /// Ask the provider, swallowing every failure.
    ///
    /// Provider errors must never reach the caller: analysis always
    /// completes on the heuristic path.
    fn consult_provider(&self, request: &AnalysisRequest) -> Option<PartialAnalysis> {
        let provider = self.provider.as_ref()?;

        let context = ProviderContext {
            layer: request.layer,
            features: request.features.clone(),
        };

        match provider.analyze_description(&request.description, Some(&context)) {
            Ok(partial) => {
                debug!(provider = provider.name(), "provider result received");
                Some(sanitize(partial))
            }
            Err(err) => {
                warn!(
                    provider = provider.name(),
                    error = %err,
                    "analysis provider failed, continuing with heuristics"
                );
                None
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        self.provider.as_ref().map(|p| p.name()).unwrap_or("none")
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop provider fields that fail basic validation rather than letting bad
/// data steer the analysis.
fn sanitize(mut partial: PartialAnalysis) -> PartialAnalysis {
    if let Some(confidence) = partial.confidence {
        if !(0.0..=1.0).contains(&confidence) {
            partial.confidence = None;
        }
    }
    partial
}

/// Adopt a provider-suggested name if it satisfies the layer's convention;
/// the heuristic primary moves to the front of the alternatives.
fn merge_suggested_name(naming: &mut NamingSuggestion, layer: LayerId, suggested: &str) {
    let acceptable = taxonomy::naming_regex(layer)
        .map(|re| re.is_match(suggested))
        .unwrap_or(false);

    if !acceptable {
        debug!(name = suggested, "provider name rejected by layer convention");
        return;
    }
    if naming.primary == suggested {
        return;
    }

    let previous = std::mem::replace(&mut naming.primary, suggested.to_string());
    naming.alternatives.retain(|n| n != suggested);
    naming.alternatives.insert(0, previous);
    naming.alternatives.truncate(4);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
