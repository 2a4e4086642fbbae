//! Component name suggestion.
//!
//! Concepts are pulled from the description through a bilingual dictionary
//! (Portuguese source word → English concept) plus any meaningful token left
//! over; candidates are assembled per the target layer's convention and
//! ranked by a small fixed-point scoring scheme. Like classification, this is
//! a total operation: an empty candidate list degrades to the layer's
//! fallback name, never to an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::taxonomy::{self, LayerId};
use crate::domain::text;

// ── Result type ──────────────────────────────────────────────────────────────

/// Ranked naming proposal for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingSuggestion {
    pub primary: String,
    /// Up to four runners-up, best first.
    pub alternatives: Vec<String>,
    pub reasoning: String,
    /// `min(1, matched segments / total segments + 0.2)` for the primary.
    pub confidence: f64,
}

/// Optional naming hints supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamingContext {
    /// Module prefix for feature names (`checkout` → `checkout-payment`).
    pub prefix: Option<String>,
    /// Suffix appended to single-concept candidates.
    pub suffix: Option<String>,
}

// ── Vocabulary ───────────────────────────────────────────────────────────────

/// Portuguese description word → English naming concept.
///
/// Only words longer than three characters are listed; shorter ones never
/// become concepts anyway.
static CONCEPT_DICTIONARY: &[(&str, &str)] = &[
    ("botao", "button"),
    ("formulario", "form"),
    ("tela", "screen"),
    ("pagina", "page"),
    ("usuario", "user"),
    ("produto", "product"),
    ("cliente", "client"),
    ("pedido", "order"),
    ("carrinho", "cart"),
    ("busca", "search"),
    ("lista", "list"),
    ("tabela", "table"),
    ("cartao", "card"),
    ("imagem", "image"),
    ("titulo", "title"),
    ("texto", "text"),
    ("campo", "field"),
    ("senha", "password"),
    ("endereco", "address"),
    ("pagamento", "payment"),
    ("mensagem", "message"),
    ("notificacao", "notification"),
    ("configuracao", "settings"),
    ("relatorio", "report"),
    ("grafico", "chart"),
    ("arquivo", "file"),
    ("dados", "data"),
    ("cadastro", "signup"),
    ("perfil", "profile"),
    ("modelo", "model"),
    ("ajuda", "help"),
];

/// Identifier keywords that must never be emitted as a component name.
static RESERVED_WORDS: &[&str] = &[
    "type", "class", "function", "const", "let", "var", "return", "import",
    "export", "default", "new", "delete", "void", "null", "true", "false",
    "enum", "interface", "extends", "switch", "case", "for", "while", "do",
    "if", "else", "try", "catch", "this", "super", "static", "async", "await",
    "yield", "in", "of", "instanceof", "typeof",
];

static CRUD_VERBS: &[&str] = &["find-one", "find-many", "create", "update", "delete"];

static UTIL_VERBS: &[&str] = &["format", "validate", "parse", "convert", "calculate"];

const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 50;
const IDEAL_NAME_LEN: i64 = 15;
const MAX_CONCEPTS: usize = 5;

// ── Suggestion ───────────────────────────────────────────────────────────────

/// Suggest a layer-appropriate name for the described component.
pub fn suggest_name(
    description: &str,
    layer: LayerId,
    context: Option<&NamingContext>,
) -> NamingSuggestion {
    let ndesc = text::normalize(description);
    let concepts = extract_concepts(&ndesc);

    let mut candidates: Vec<Candidate> = generate_candidates(layer, &concepts, context)
        .into_iter()
        .filter(|c| is_valid(layer, &c.name))
        .collect();

    for candidate in &mut candidates {
        candidate.score = score_candidate(candidate, &ndesc);
    }
    // Stable sort: ties keep generation order (singles before pairs).
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        layer = %layer,
        concepts = concepts.len(),
        candidates = candidates.len(),
        "naming candidates ranked"
    );

    match candidates.first() {
        Some(best) => {
            let matched = matched_segments(best, &ndesc);
            let confidence =
                (matched as f64 / best.segments.len().max(1) as f64 + 0.2).min(1.0);
            let reasoning = format!(
                "Derived from concepts [{}]; {} candidate(s) ranked, '{}' fits the {} naming convention best",
                concepts.join(", "),
                candidates.len(),
                best.name,
                layer
            );

            NamingSuggestion {
                primary: best.name.clone(),
                alternatives: candidates
                    .iter()
                    .skip(1)
                    .take(4)
                    .map(|c| c.name.clone())
                    .collect(),
                reasoning,
                confidence,
            }
        }
        None => fallback_suggestion(layer, &concepts),
    }
}

/// Per-layer fallback when no candidate survives validation.
fn fallback_suggestion(layer: LayerId, concepts: &[String]) -> NamingSuggestion {
    let name = taxonomy::profile(layer)
        .map(|p| p.fallback_name)
        .unwrap_or("component");

    NamingSuggestion {
        primary: name.to_string(),
        alternatives: Vec::new(),
        reasoning: if concepts.is_empty() {
            format!("No usable concepts in the description; using the default {layer} name")
        } else {
            format!(
                "Concepts [{}] produced no valid {layer} name; using the default",
                concepts.join(", ")
            )
        },
        confidence: 0.2,
    }
}

// ── Concept extraction ───────────────────────────────────────────────────────

/// Dictionary concepts first (in description order), then leftover meaningful
/// tokens, deduplicated, capped at [`MAX_CONCEPTS`].
fn extract_concepts(ndesc: &str) -> Vec<String> {
    let mut concepts: Vec<String> = Vec::new();

    for token in text::tokenize(ndesc) {
        let concept = match CONCEPT_DICTIONARY.iter().find(|(pt, _)| *pt == token) {
            Some((_, en)) => (*en).to_string(),
            None if token.len() > 3 && !text::is_stop_word(token) => token.to_string(),
            None => continue,
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
        if concepts.len() == MAX_CONCEPTS {
            break;
        }
    }

    concepts
}

// ── Candidate generation ─────────────────────────────────────────────────────

struct Candidate {
    name: String,
    /// The dash-case words the name is made of, for segment matching.
    segments: Vec<String>,
    score: f64,
}

impl Candidate {
    fn new(name: String, segments: Vec<String>) -> Self {
        Self {
            name,
            segments,
            score: 0.0,
        }
    }
}

fn generate_candidates(
    layer: LayerId,
    concepts: &[String],
    context: Option<&NamingContext>,
) -> Vec<Candidate> {
    let mut out = Vec::new();

    // Singles.
    for c in concepts {
        out.push(Candidate::new(c.clone(), vec![c.clone()]));
    }

    // Unordered pairs, in extraction order.
    for (i, a) in concepts.iter().enumerate() {
        for b in concepts.iter().skip(i + 1) {
            out.push(Candidate::new(
                format!("{a}-{b}"),
                vec![a.clone(), b.clone()],
            ));
        }
    }

    // Layer-specific patterns.
    match layer {
        LayerId::Feature => {
            if let Some(prefix) = context.and_then(|c| c.prefix.as_deref()) {
                let prefix = text::normalize(prefix).replace(' ', "-");
                for c in concepts {
                    out.push(Candidate::new(
                        format!("{prefix}-{c}"),
                        vec![prefix.clone(), c.clone()],
                    ));
                }
            }
        }
        LayerId::Gateway => {
            for verb in CRUD_VERBS {
                for c in concepts {
                    let mut segments: Vec<String> =
                        verb.split('-').map(str::to_string).collect();
                    segments.push(c.clone());
                    out.push(Candidate::new(format!("{verb}-{c}"), segments));
                }
            }
        }
        LayerId::Util => {
            for verb in UTIL_VERBS {
                for c in concepts {
                    out.push(Candidate::new(
                        format!("{verb}-{c}"),
                        vec![(*verb).to_string(), c.clone()],
                    ));
                }
            }
        }
        LayerId::Entity => {
            for c in concepts {
                out.push(Candidate::new(entity_name(&[c.clone()]), vec![c.clone()]));
            }
            for (i, a) in concepts.iter().enumerate() {
                for b in concepts.iter().skip(i + 1) {
                    out.push(Candidate::new(
                        entity_name(&[a.clone(), b.clone()]),
                        vec![a.clone(), b.clone()],
                    ));
                }
            }
        }
        _ => {}
    }

    // Suffix hint applies to single concepts on any layer.
    if let Some(suffix) = context.and_then(|c| c.suffix.as_deref()) {
        let suffix = text::normalize(suffix).replace(' ', "-");
        if !suffix.is_empty() {
            for c in concepts {
                out.push(Candidate::new(
                    format!("{c}-{suffix}"),
                    vec![c.clone(), suffix.clone()],
                ));
            }
        }
    }

    out
}

/// `["order", "item"]` → `TOrderItemEntity`.
fn entity_name(words: &[String]) -> String {
    let pascal: String = words.iter().map(|w| pascal_case(w)).collect();
    format!("T{pascal}Entity")
}

fn pascal_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

fn is_valid(layer: LayerId, name: &str) -> bool {
    if name.len() < MIN_NAME_LEN || name.len() > MAX_NAME_LEN {
        return false;
    }
    if RESERVED_WORDS.contains(&name) {
        return false;
    }
    match taxonomy::naming_regex(layer) {
        Some(re) => re.is_match(name),
        // A registry pattern that failed to compile must not take naming
        // down with it; accept plain dash-case names.
        None => name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
    }
}

// ── Ranking ──────────────────────────────────────────────────────────────────

/// Length closeness to 15 chars (max 20) + 15 per segment found in the
/// description + 10 for the convention match + readability (fewer hyphens
/// score higher).
fn score_candidate(candidate: &Candidate, ndesc: &str) -> f64 {
    let length_score =
        (20 - (candidate.name.len() as i64 - IDEAL_NAME_LEN).abs()).max(0) as f64;

    let segment_score = 15.0 * matched_segments(candidate, ndesc) as f64;

    // Candidates were validated against the convention already, so this is a
    // constant 10 — kept explicit so the formula reads whole.
    let convention_score = 10.0;

    let hyphens = candidate.name.matches('-').count() as i64;
    let readability_score = (10 - 2 * hyphens).max(0) as f64;

    length_score + segment_score + convention_score + readability_score
}

fn matched_segments(candidate: &Candidate, ndesc: &str) -> usize {
    candidate
        .segments
        .iter()
        .filter(|s| !s.is_empty() && ndesc.contains(s.as_str()))
        .count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn suggest(description: &str, layer: LayerId) -> NamingSuggestion {
        suggest_name(description, layer, None)
    }

    // ── headline scenarios ───────────────────────────────────────────────────

    #[test]
    fn button_atom_gets_a_button_name() {
        let suggestion = suggest("botão com variantes de cor", LayerId::Atom);
        let dash_case = Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap();
        assert!(dash_case.is_match(&suggestion.primary));
        assert!(
            suggestion.primary.contains("button"),
            "primary was '{}'",
            suggestion.primary
        );
    }

    #[test]
    fn entity_names_use_the_wrapper_pattern() {
        let suggestion = suggest("modelo de usuário", LayerId::Entity);
        let entity = Regex::new(r"^T[A-Z][a-zA-Z]*Entity$").unwrap();
        assert!(
            entity.is_match(&suggestion.primary),
            "primary was '{}'",
            suggestion.primary
        );
        for alt in &suggestion.alternatives {
            assert!(entity.is_match(alt), "alternative '{alt}' breaks the pattern");
        }
    }

    #[test]
    fn gateway_names_start_with_a_crud_verb() {
        let suggestion = suggest("busca de usuário na api", LayerId::Gateway);
        // The best-ranked gateway name may be a plain concept; the verb forms
        // must at least appear among the candidates.
        let all: Vec<&String> = std::iter::once(&suggestion.primary)
            .chain(suggestion.alternatives.iter())
            .collect();
        assert!(
            all.iter()
                .any(|n| CRUD_VERBS.iter().any(|v| n.starts_with(v))),
            "no CRUD-verb candidate in {all:?}"
        );
    }

    #[test]
    fn util_names_start_with_an_action_verb() {
        let suggestion = suggest("formatar data", LayerId::Util);
        let all: Vec<&String> = std::iter::once(&suggestion.primary)
            .chain(suggestion.alternatives.iter())
            .collect();
        assert!(
            all.iter()
                .any(|n| UTIL_VERBS.iter().any(|v| n.starts_with(v))),
            "no verb candidate in {all:?}"
        );
    }

    #[test]
    fn feature_prefix_is_applied() {
        let context = NamingContext {
            prefix: Some("checkout".into()),
            suffix: None,
        };
        let suggestion = suggest_name("tela de pagamento", LayerId::Feature, Some(&context));
        let all: Vec<&String> = std::iter::once(&suggestion.primary)
            .chain(suggestion.alternatives.iter())
            .collect();
        assert!(
            all.iter().any(|n| n.starts_with("checkout-")),
            "no prefixed candidate in {all:?}"
        );
    }

    // ── validity ─────────────────────────────────────────────────────────────

    #[test]
    fn every_returned_name_satisfies_the_layer_pattern() {
        let descriptions = [
            "botão de confirmação",
            "formulário de cadastro de usuário",
            "lista de produtos com busca",
            "tela de login",
        ];
        for layer in LayerId::ALL {
            let re = taxonomy::naming_regex(layer).unwrap();
            for desc in descriptions {
                let s = suggest(desc, layer);
                assert!(
                    re.is_match(&s.primary),
                    "{layer}: primary '{}' breaks pattern",
                    s.primary
                );
                for alt in &s.alternatives {
                    assert!(re.is_match(alt), "{layer}: alternative '{alt}' breaks pattern");
                }
            }
        }
    }

    #[test]
    fn reserved_words_are_never_suggested() {
        // "interface" is both an entity keyword and a reserved word.
        let s = suggest("interface", LayerId::Atom);
        assert_ne!(s.primary, "interface");
        assert!(!s.alternatives.contains(&"interface".to_string()));
    }

    #[test]
    fn empty_description_falls_back_to_the_layer_default() {
        let s = suggest("", LayerId::Atom);
        assert_eq!(s.primary, "base-element");
        assert!(s.alternatives.is_empty());

        let s = suggest("", LayerId::Entity);
        assert_eq!(s.primary, "TBaseEntity");
    }

    #[test]
    fn accented_input_produces_ascii_names() {
        let s = suggest("notificação de usuário", LayerId::Molecule);
        assert!(s.primary.is_ascii());
    }

    // ── confidence ───────────────────────────────────────────────────────────

    #[test]
    fn confidence_is_within_unit_interval() {
        for desc in ["", "botão", "lista de produtos com busca e filtro"] {
            for layer in [LayerId::Atom, LayerId::Entity, LayerId::Gateway] {
                let c = suggest(desc, layer).confidence;
                assert!((0.0..=1.0).contains(&c), "confidence {c}");
            }
        }
    }

    #[test]
    fn fully_matched_segments_cap_confidence_at_one() {
        // Both segments appear verbatim in the description.
        let s = suggest("lista de produtos", LayerId::Molecule);
        assert!(s.confidence <= 1.0);
        assert!(s.confidence >= 0.2);
    }

    // ── determinism ──────────────────────────────────────────────────────────

    #[test]
    fn suggestion_is_deterministic() {
        let a = suggest("formulário de cadastro", LayerId::Molecule);
        let b = suggest("formulário de cadastro", LayerId::Molecule);
        assert_eq!(a, b);
    }

    // ── concept extraction ───────────────────────────────────────────────────

    #[test]
    fn dictionary_words_map_to_english_concepts() {
        let concepts = extract_concepts("botao de usuario");
        assert_eq!(concepts, vec!["button".to_string(), "user".to_string()]);
    }

    #[test]
    fn unknown_long_tokens_become_concepts_verbatim() {
        let concepts = extract_concepts("um componentezinho especial");
        assert!(concepts.contains(&"especial".to_string()));
    }

    #[test]
    fn concepts_are_capped() {
        let concepts =
            extract_concepts("botao usuario produto cliente pedido carrinho busca lista");
        assert_eq!(concepts.len(), MAX_CONCEPTS);
    }

    #[test]
    fn duplicate_concepts_collapse() {
        let concepts = extract_concepts("botao botao button");
        assert_eq!(concepts, vec!["button".to_string()]);
    }

    // ── helpers ──────────────────────────────────────────────────────────────

    #[test]
    fn pascal_case_capitalises_first_letter_only() {
        assert_eq!(pascal_case("user"), "User");
        assert_eq!(pascal_case("orderItem"), "OrderItem");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn entity_name_joins_pascal_words() {
        assert_eq!(
            entity_name(&["order".to_string(), "item".to_string()]),
            "TOrderItemEntity"
        );
    }
}
