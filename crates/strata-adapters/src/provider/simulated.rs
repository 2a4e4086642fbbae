//! Deterministic stand-in for an LLM-backed analysis provider.
//!
//! Mirrors what a hosted model would return for common component
//! descriptions, computed from keyword rules instead of a network call. The
//! point is to exercise the provider-merge path (and demo the tool) with
//! zero external dependencies — answers are intentionally conservative and
//! only filled in when a rule is confident.

use tracing::debug;

use strata_core::application::ports::{AnalysisProvider, PartialAnalysis, ProviderContext};
use strata_core::domain::{LayerId, text};
use strata_core::error::StrataResult;

/// Keyword-driven simulated analyzer.
#[derive(Debug, Default, Clone)]
pub struct SimulatedProvider;

/// (keywords, layer, concepts) — first matching rule wins.
static RULES: &[(&[&str], LayerId, &[&str])] = &[
    (
        &["login", "autenticacao", "signin"],
        LayerId::Feature,
        &["login", "auth"],
    ),
    (
        &["checkout", "pagamento", "payment"],
        LayerId::Feature,
        &["checkout", "payment"],
    ),
    (
        &["dashboard", "painel"],
        LayerId::Feature,
        &["dashboard"],
    ),
    (
        &["modal", "dialog", "formulario"],
        LayerId::Molecule,
        &["modal", "form"],
    ),
    (
        &["tabela", "lista", "galeria"],
        LayerId::Organism,
        &["list"],
    ),
    (
        &["botao", "button", "icone", "input"],
        LayerId::Atom,
        &["button"],
    ),
    (
        &["api", "endpoint", "requisicao"],
        LayerId::Gateway,
        &["request"],
    ),
];

impl SimulatedProvider {
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisProvider for SimulatedProvider {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn analyze_description(
        &self,
        description: &str,
        context: Option<&ProviderContext>,
    ) -> StrataResult<PartialAnalysis> {
        let ndesc = text::normalize(description);

        let hit = RULES
            .iter()
            .find(|(words, _, _)| words.iter().any(|w| ndesc.contains(w)));

        let partial = match hit {
            Some((_, layer, concepts)) => {
                debug!(layer = %layer, "simulated provider matched a rule");
                PartialAnalysis {
                    // Respect a layer the caller already fixed.
                    layer: context.and_then(|c| c.layer).or(Some(*layer)),
                    confidence: Some(0.9),
                    concepts: concepts.iter().map(|c| c.to_string()).collect(),
                    suggested_name: None,
                    reasoning: Some(format!(
                        "simulated analysis matched the '{layer}' vocabulary"
                    )),
                }
            }
            // No opinion: empty partial, heuristics decide everything.
            None => PartialAnalysis::default(),
        };

        Ok(partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_descriptions_map_to_feature() {
        let provider = SimulatedProvider::new();
        let partial = provider
            .analyze_description("tela de login do sistema", None)
            .unwrap();
        assert_eq!(partial.layer, Some(LayerId::Feature));
        assert!(partial.concepts.contains(&"auth".to_string()));
    }

    #[test]
    fn rule_order_decides_overlaps() {
        // "formulario de login" matches the login rule before the modal rule.
        let provider = SimulatedProvider::new();
        let partial = provider
            .analyze_description("formulário de login", None)
            .unwrap();
        assert_eq!(partial.layer, Some(LayerId::Feature));
    }

    #[test]
    fn unmatched_description_has_no_opinion() {
        let provider = SimulatedProvider::new();
        let partial = provider
            .analyze_description("algo completamente diferente", None)
            .unwrap();
        assert_eq!(partial, PartialAnalysis::default());
    }

    #[test]
    fn caller_layer_is_respected() {
        let provider = SimulatedProvider::new();
        let context = ProviderContext {
            layer: Some(LayerId::Molecule),
            features: vec![],
        };
        let partial = provider
            .analyze_description("botão de envio", Some(&context))
            .unwrap();
        assert_eq!(partial.layer, Some(LayerId::Molecule));
    }

    #[test]
    fn provider_is_deterministic() {
        let provider = SimulatedProvider::new();
        let a = provider.analyze_description("modal de aviso", None).unwrap();
        let b = provider.analyze_description("modal de aviso", None).unwrap();
        assert_eq!(a, b);
    }
}
