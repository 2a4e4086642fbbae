//! Layer classification: free text in, ranked layer candidates out.
//!
//! The scorer is a rule-weighted heuristic, not a statistical model. Four
//! sub-scores are summed per layer and multiplied by the layer's registry
//! weight; the constants (10/5/3/8/5/3) are load-bearing — they tune the
//! relative precedence of layers that share vocabulary, and changing them
//! changes ranking outcomes. Treat any adjustment as a behaviour change.
//!
//! Confidence measures the *margin* between the best and second-best
//! candidate, not a calibrated probability. A confidence of 0.9 means "the
//! runner-up scored far lower", not "90% likely correct".

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::error::DomainError;
use crate::domain::taxonomy::{Complexity, LAYER_REGISTRY, LayerId, LayerProfile};
use crate::domain::text;

// ── Result types ─────────────────────────────────────────────────────────────

/// One scored layer candidate. Ephemeral, produced per classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationCandidate {
    pub layer: LayerId,
    pub score: f64,
}

/// The outcome of a classification call. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Highest-scoring layer.
    pub primary: ClassificationCandidate,
    /// Ranks 1–3, in descending score order.
    pub alternatives: Vec<ClassificationCandidate>,
    /// Margin over the runner-up, in `[0, 1]`. See module docs.
    pub confidence: f64,
    /// Human-readable account of what matched.
    pub reasoning: String,
    /// The full descending ranking, one entry per registered layer.
    pub ranking: Vec<ClassificationCandidate>,
}

impl ClassificationResult {
    /// Score assigned to `layer` in this classification, if it was ranked.
    pub fn score_of(&self, layer: LayerId) -> Option<f64> {
        self.ranking
            .iter()
            .find(|c| c.layer == layer)
            .map(|c| c.score)
    }
}

// ── Scoring vocabulary ───────────────────────────────────────────────────────

/// Hard-coded synonym bridges between Portuguese keywords and tokens that
/// commonly appear in mixed-language descriptions.
static SYNONYMS: &[(&str, &[&str])] = &[
    ("botao", &["button", "btn", "clique", "click"]),
    ("button", &["botao", "btn"]),
    ("formulario", &["form", "submit"]),
    ("form", &["formulario"]),
    ("tela", &["screen", "page", "pagina"]),
    ("pagina", &["page", "tela"]),
    ("icone", &["icon"]),
    ("imagem", &["image", "img"]),
    ("lista", &["list"]),
    ("tabela", &["table", "grid"]),
    ("usuario", &["user"]),
    ("dados", &["data"]),
    ("estado", &["state", "store"]),
    ("api", &["http", "rest", "endpoint"]),
    ("busca", &["search", "filter", "filtro"]),
];

fn synonyms_of(keyword: &str) -> Option<&'static [&'static str]> {
    SYNONYMS
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, syns)| *syns)
}

/// Words signalling each complexity tier, matched as substrings of the
/// normalised description.
fn complexity_indicators(tier: Complexity) -> &'static [&'static str] {
    match tier {
        Complexity::Low => &[
            "simples", "simple", "basico", "basic", "pequeno", "small", "minimo",
            "minimal",
        ],
        Complexity::Medium => &[
            "medio", "medium", "moderado", "interativo", "interactive",
        ],
        Complexity::High => &[
            "complexo", "complex", "avancado", "advanced", "completo", "complete",
            "dinamico", "dynamic",
        ],
    }
}

/// Words signalling a dependency-tier label ("independente" hints at a layer
/// whose tier is "none"). Most labels carry no indicators.
static DEP_TIER_INDICATORS: &[(&str, &[&str])] = &[
    (
        "none",
        &["independente", "independent", "isolado", "isolated", "puro", "pure"],
    ),
    ("atoms", &["compoe", "composicao", "combina", "combines"]),
    ("all", &["orquestra", "orchestrates", "integra", "integrates"]),
];

fn dep_tier_indicators(label: &str) -> &'static [&'static str] {
    DEP_TIER_INDICATORS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

// ── Classification ───────────────────────────────────────────────────────────

/// Classify a component description against the built-in taxonomy.
///
/// `features` are caller-supplied tags (e.g. `"validation"`); the classifier
/// extends them with the meaningful words of the description itself. Total:
/// a scoring failure degrades to the rule-based fallback cascade rather than
/// surfacing an error.
pub fn classify(description: &str, features: &[String]) -> ClassificationResult {
    classify_with(LAYER_REGISTRY, description, features)
}

/// Classify against an explicit registry. Production code uses [`classify`];
/// this entry point exists so alternate taxonomies can be exercised.
pub fn classify_with(
    registry: &[LayerProfile],
    description: &str,
    features: &[String],
) -> ClassificationResult {
    match score_all(registry, description, features) {
        Ok(scored) => build_result(scored),
        Err(err) => {
            warn!(error = %err, "layer scoring failed, using rule-based fallback");
            fallback_classify(description)
        }
    }
}

struct ScoredLayer {
    candidate: ClassificationCandidate,
    matched_keywords: Vec<&'static str>,
}

/// Score every registered layer. Errors only on a malformed taxonomy — the
/// caller turns that into the fallback cascade.
fn score_all(
    registry: &[LayerProfile],
    description: &str,
    features: &[String],
) -> Result<Vec<ScoredLayer>, DomainError> {
    if registry.is_empty() {
        return Err(DomainError::EmptyTaxonomy);
    }

    let ndesc = text::normalize(description);
    let tokens = text::tokenize(&ndesc);

    // Caller features + meaningful description words, all normalised.
    let mut all_features: Vec<String> = features.iter().map(|f| text::normalize(f)).collect();
    all_features.extend(text::meaningful_words(&ndesc));

    let mut scored = Vec::with_capacity(registry.len());
    for profile in registry {
        if !profile.weight.is_finite() || profile.weight <= 0.0 {
            return Err(DomainError::InvalidTaxonomy(format!(
                "layer '{}' has weight {}",
                profile.layer, profile.weight
            )));
        }

        let (raw, matched) = score_layer(profile, &ndesc, &tokens, &all_features);
        scored.push(ScoredLayer {
            candidate: ClassificationCandidate {
                layer: profile.layer,
                score: (raw * profile.weight).max(0.0),
            },
            matched_keywords: matched,
        });
    }

    Ok(scored)
}

/// The four sub-scores for one layer. Returns the unweighted sum plus the
/// keywords that matched (for reasoning output).
fn score_layer(
    profile: &LayerProfile,
    ndesc: &str,
    tokens: &[&str],
    features: &[String],
) -> (f64, Vec<&'static str>) {
    let mut score = 0.0;
    let mut matched = Vec::new();

    // 1. Keyword score.
    for kw in profile.keywords {
        if ndesc.contains(kw) {
            score += 10.0;
            matched.push(*kw);
        }
        for token in tokens {
            if token.contains(kw) || kw.contains(token) {
                score += 5.0;
            }
        }
        if let Some(syns) = synonyms_of(kw) {
            if syns.iter().any(|s| tokens.contains(s)) {
                score += 3.0;
            }
        }
    }

    // 2. Feature score.
    for feature in features {
        for kw in profile.keywords {
            if feature.contains(kw) {
                score += 8.0;
            }
        }
    }

    // 3. Complexity-tier score.
    for indicator in complexity_indicators(profile.complexity) {
        if ndesc.contains(indicator) {
            score += 5.0;
        }
    }

    // 4. Dependency-tier score.
    for indicator in dep_tier_indicators(profile.dependency_tier) {
        if ndesc.contains(indicator) {
            score += 3.0;
        }
    }

    (score, matched)
}

fn build_result(mut scored: Vec<ScoredLayer>) -> ClassificationResult {
    // Stable sort: ties keep registry order, so results are deterministic.
    scored.sort_by(|a, b| b.candidate.score.total_cmp(&a.candidate.score));

    let ranking: Vec<ClassificationCandidate> =
        scored.iter().map(|s| s.candidate.clone()).collect();

    let primary = ranking[0].clone();
    let alternatives: Vec<ClassificationCandidate> =
        ranking.iter().skip(1).take(3).cloned().collect();

    let secondary_score = ranking.get(1).map(|c| c.score).unwrap_or(0.0);
    let confidence = confidence_from_margin(primary.score, secondary_score);

    let reasoning = build_reasoning(&scored[0], &alternatives);

    debug!(
        layer = %primary.layer,
        score = primary.score,
        confidence,
        "description classified"
    );

    ClassificationResult {
        primary,
        alternatives,
        confidence,
        reasoning,
        ranking,
    }
}

/// Margin-over-runner-up confidence.
///
/// - best score 0 → 0 (nothing matched at all)
/// - runner-up 0  → 1 (unambiguous winner)
/// - otherwise `max(0.1, (best - second) / best)`
fn confidence_from_margin(primary: f64, secondary: f64) -> f64 {
    if primary <= 0.0 {
        0.0
    } else if secondary <= 0.0 {
        1.0
    } else {
        ((primary - secondary) / primary).max(0.1)
    }
}

fn build_reasoning(winner: &ScoredLayer, alternatives: &[ClassificationCandidate]) -> String {
    // Tier labels come from the built-in registry; an injected registry that
    // diverges from it just loses the tier suffix in the reasoning text.
    let profile = LAYER_REGISTRY
        .iter()
        .find(|p| p.layer == winner.candidate.layer);

    let keywords = if winner.matched_keywords.is_empty() {
        "no direct keyword matches".to_string()
    } else {
        format!("matched keywords: {}", winner.matched_keywords.join(", "))
    };

    let tiers = match profile {
        Some(p) => format!(
            "; complexity {}, dependencies {}, reusability {}",
            p.complexity.as_str(),
            p.dependency_tier,
            p.reusability.as_str()
        ),
        None => String::new(),
    };

    let alts = if alternatives.is_empty() {
        String::new()
    } else {
        format!(
            "; alternatives: {}",
            alternatives
                .iter()
                .map(|c| c.layer.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    format!(
        "Classified as '{}': {}{}{}",
        winner.candidate.layer, keywords, tiers, alts
    )
}

// ── Rule-based fallback cascade ───────────────────────────────────────────────

/// Last-resort classification used when the scoring path fails.
///
/// Tests four fixed keyword buckets in order and returns the first hit with
/// a fixed confidence, defaulting to `atom` at 0.3. This path has no failure
/// mode — it is the terminal case.
pub(crate) fn fallback_classify(description: &str) -> ClassificationResult {
    const BUCKETS: &[(LayerId, f64, &[&str])] = &[
        (
            LayerId::Atom,
            0.7,
            &["botao", "button", "icone", "icon", "input", "label"],
        ),
        (
            LayerId::Molecule,
            0.6,
            &["modal", "formulario", "form", "card", "dropdown"],
        ),
        (
            LayerId::Organism,
            0.6,
            &["header", "footer", "lista", "tabela", "secao", "navbar"],
        ),
        (
            LayerId::Feature,
            0.5,
            &["tela", "pagina", "page", "screen", "fluxo", "dashboard"],
        ),
    ];

    let ndesc = text::normalize(description);

    let (layer, confidence) = BUCKETS
        .iter()
        .find(|(_, _, words)| words.iter().any(|w| ndesc.contains(w)))
        .map(|(layer, conf, _)| (*layer, *conf))
        .unwrap_or((LayerId::Atom, 0.3));

    ClassificationResult {
        primary: ClassificationCandidate { layer, score: 0.0 },
        alternatives: Vec::new(),
        confidence,
        reasoning: format!(
            "Classified as '{layer}' by rule-based fallback (scoring unavailable)"
        ),
        ranking: vec![ClassificationCandidate { layer, score: 0.0 }],
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_plain(description: &str) -> ClassificationResult {
        classify(description, &[])
    }

    // ── headline scenarios ───────────────────────────────────────────────────

    #[test]
    fn reusable_button_is_an_atom() {
        let result = classify_plain("um botão reutilizável");
        assert_eq!(result.primary.layer, LayerId::Atom);
        assert!(
            result.confidence > 0.5,
            "confidence was {}",
            result.confidence
        );
    }

    #[test]
    fn confirmation_modal_with_form_is_a_molecule() {
        let result = classify_plain("modal de confirmação com formulário");
        assert_eq!(result.primary.layer, LayerId::Molecule);
    }

    #[test]
    fn login_screen_is_a_feature() {
        let result = classify_plain("tela de login do usuário");
        assert_eq!(result.primary.layer, LayerId::Feature);
    }

    #[test]
    fn api_client_is_a_gateway() {
        let result = classify_plain("chamada http para o endpoint de api");
        assert_eq!(result.primary.layer, LayerId::Gateway);
    }

    #[test]
    fn english_descriptions_work_too() {
        let result = classify_plain("a reusable button with icon");
        assert_eq!(result.primary.layer, LayerId::Atom);
    }

    // ── result shape ─────────────────────────────────────────────────────────

    #[test]
    fn alternatives_are_ranks_one_to_three() {
        let result = classify_plain("modal de confirmação com formulário");
        assert_eq!(result.alternatives.len(), 3);
        assert_eq!(result.ranking.len(), LAYER_REGISTRY.len());
        assert_eq!(result.ranking[1], result.alternatives[0]);
        assert_eq!(result.ranking[3], result.alternatives[2]);
    }

    #[test]
    fn ranking_is_descending() {
        let result = classify_plain("formulário de cadastro com validação");
        for pair in result.ranking.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn reasoning_names_the_winner_and_matches() {
        let result = classify_plain("um botão reutilizável");
        assert!(result.reasoning.contains("atom"));
        assert!(result.reasoning.contains("botao"));
    }

    // ── determinism ──────────────────────────────────────────────────────────

    #[test]
    fn classification_is_deterministic() {
        let a = classify_plain("modal de confirmação com formulário");
        let b = classify_plain("modal de confirmação com formulário");
        assert_eq!(a, b);
    }

    // ── confidence bounds ────────────────────────────────────────────────────

    #[test]
    fn confidence_is_zero_when_nothing_matches() {
        let result = classify_plain("zzz qqq www");
        assert_eq!(result.primary.score, 0.0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn confidence_is_one_when_runner_up_scores_zero() {
        assert_eq!(confidence_from_margin(42.0, 0.0), 1.0);
    }

    #[test]
    fn confidence_has_a_floor_of_point_one() {
        assert_eq!(confidence_from_margin(100.0, 99.0), 0.1);
    }

    #[test]
    fn confidence_stays_in_unit_interval() {
        for desc in [
            "um botão reutilizável",
            "modal de confirmação",
            "tela de login",
            "",
            "gateway api http",
        ] {
            let c = classify_plain(desc).confidence;
            assert!((0.0..=1.0).contains(&c), "confidence {c} for '{desc}'");
        }
    }

    // ── score monotonicity ───────────────────────────────────────────────────

    #[test]
    fn adding_a_keyword_never_lowers_that_layers_score() {
        let without = classify_plain("painel generico");
        let with = classify_plain("painel generico botao");
        assert!(
            with.score_of(LayerId::Atom).unwrap() >= without.score_of(LayerId::Atom).unwrap()
        );
    }

    // ── features ─────────────────────────────────────────────────────────────

    #[test]
    fn caller_features_boost_matching_layers() {
        let bare = classify("componente generico", &[]);
        let tagged = classify("componente generico", &["botao".to_string()]);
        assert!(
            tagged.score_of(LayerId::Atom).unwrap() > bare.score_of(LayerId::Atom).unwrap()
        );
    }

    // ── fallback cascade ─────────────────────────────────────────────────────

    #[test]
    fn empty_registry_falls_back_instead_of_failing() {
        let result = classify_with(&[], "um botão simples", &[]);
        assert_eq!(result.primary.layer, LayerId::Atom);
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn fallback_bucket_order_is_respected() {
        // "modal" hits the molecule bucket only after the atom bucket misses.
        let result = fallback_classify("modal de aviso");
        assert_eq!(result.primary.layer, LayerId::Molecule);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn fallback_defaults_to_atom_at_point_three() {
        let result = fallback_classify("nada relevante aqui");
        assert_eq!(result.primary.layer, LayerId::Atom);
        assert_eq!(result.confidence, 0.3);
    }

    #[test]
    fn fallback_never_fails_on_weird_input() {
        for desc in ["", "  ", "!!!", "ção ção ção"] {
            let result = fallback_classify(desc);
            assert!(LayerId::ALL.contains(&result.primary.layer));
        }
    }

    #[test]
    fn malformed_weight_triggers_fallback() {
        use crate::domain::taxonomy::{DASH_CASE, Reusability};

        static BROKEN: &[LayerProfile] = &[LayerProfile {
            layer: LayerId::Molecule,
            keywords: &["modal"],
            complexity: Complexity::Medium,
            dependency_tier: "atoms",
            reusability: Reusability::High,
            weight: f64::NAN,
            allowed_dependencies: &[],
            naming_pattern: DASH_CASE,
            fallback_name: "x",
        }];

        let result = classify_with(BROKEN, "um botão simples", &[]);
        // Fallback cascade, not the broken registry, decides the answer.
        assert_eq!(result.primary.layer, LayerId::Atom);
        assert_eq!(result.confidence, 0.7);
    }
}
