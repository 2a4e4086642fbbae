//! Integration tests for strata-core.
//!
//! Exercises the public API end to end: classification feeding dependency
//! analysis and naming through the analysis service, plus the cross-cutting
//! guarantees (determinism, confidence bounds, hierarchy soundness, naming
//! validity, fallback safety).

use strata_core::application::{AnalysisRequest, AnalysisService};
use strata_core::domain::{
    LayerId, Severity, ViolationKind, analyze_dependencies, check_hierarchy, classify,
    classify_with, suggest_name, taxonomy,
};

// ── end-to-end flow ───────────────────────────────────────────────────────────

#[test]
fn full_analysis_of_a_button_description() {
    let service = AnalysisService::new();
    let analysis = service.analyze(&AnalysisRequest::new("um botão reutilizável"));

    assert_eq!(analysis.layer, LayerId::Atom);
    assert!(analysis.classification.confidence > 0.5);
    assert!(analysis.dependencies.hierarchy.is_valid);
    let pattern = taxonomy::naming_regex(LayerId::Atom).unwrap();
    assert!(pattern.is_match(&analysis.naming.primary));
    assert!(
        analysis
            .dependencies
            .manifest
            .iter()
            .any(|e| e.path.contains(".atom."))
    );
}

#[test]
fn full_analysis_of_a_login_feature() {
    let service = AnalysisService::new();
    let analysis =
        service.analyze(&AnalysisRequest::new("tela de login com chamada de api"));

    assert_eq!(analysis.layer, LayerId::Feature);
    assert!(analysis.dependencies.required.contains(&LayerId::Template));
    assert!(analysis.dependencies.required.contains(&LayerId::Gateway));
    assert!(analysis.dependencies.required.contains(&LayerId::Entity));
    assert!(analysis.dependencies.hierarchy.is_valid);
}

#[test]
fn analysis_result_serialises_to_json() {
    let service = AnalysisService::new();
    let analysis = service.analyze(&AnalysisRequest::new("modal de confirmação"));

    let json = serde_json::to_value(&analysis).expect("analysis must serialise");
    assert_eq!(json["layer"], "molecule");
    assert!(json["classification"]["confidence"].is_number());
    assert!(json["naming"]["primary"].is_string());
}

// ── determinism ───────────────────────────────────────────────────────────────

#[test]
fn repeated_calls_return_identical_results() {
    let description = "formulário de cadastro com validação de senha";
    let features = vec!["validation".to_string()];

    for _ in 0..3 {
        assert_eq!(
            classify(description, &features),
            classify(description, &features)
        );
        assert_eq!(
            analyze_dependencies(description, LayerId::Molecule, &features),
            analyze_dependencies(description, LayerId::Molecule, &features)
        );
        assert_eq!(
            suggest_name(description, LayerId::Molecule, None),
            suggest_name(description, LayerId::Molecule, None)
        );
    }
}

// ── confidence bounds ─────────────────────────────────────────────────────────

#[test]
fn confidence_is_always_in_unit_interval() {
    let descriptions = [
        "",
        "um botão reutilizável",
        "modal de confirmação com formulário",
        "texto qualquer sem relacao nenhuma",
        "api gateway http request endpoint",
    ];
    for desc in descriptions {
        let result = classify(desc, &[]);
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} for '{desc}'",
            result.confidence
        );
    }
}

#[test]
fn zero_score_means_zero_confidence() {
    let result = classify("xyzzy plugh", &[]);
    assert_eq!(result.primary.score, 0.0);
    assert_eq!(result.confidence, 0.0);
}

// ── hierarchy soundness ───────────────────────────────────────────────────────

#[test]
fn every_allowed_edge_validates_cleanly() {
    for layer in LayerId::ALL {
        for dep in taxonomy::allowed_dependencies(layer) {
            let check = check_hierarchy(layer, &[*dep]);
            assert!(check.is_valid, "{layer} -> {dep} wrongly rejected");
            assert!(check.violations.is_empty());
        }
    }
}

#[test]
fn disallowed_edges_are_reported_with_the_exact_message() {
    let check = check_hierarchy(LayerId::Atom, &[LayerId::Molecule]);
    assert!(!check.is_valid);
    assert_eq!(
        check.violations,
        vec!["Layer 'atom' cannot depend on 'molecule'".to_string()]
    );
}

#[test]
fn self_dependency_is_circular() {
    let deps = analyze_dependencies("util de formatacao", LayerId::Util, &["formatting".into()]);
    assert!(
        deps.violations
            .iter()
            .any(|v| v.kind == ViolationKind::Circular && v.severity == Severity::Error)
    );
}

// ── naming validity ───────────────────────────────────────────────────────────

#[test]
fn every_suggested_name_matches_its_layer_pattern() {
    let descriptions = [
        "botão com variantes de cor",
        "lista de produtos com paginação",
        "tela de checkout do carrinho",
        "busca de usuário na api",
    ];
    for layer in LayerId::ALL {
        let pattern = taxonomy::naming_regex(layer).expect("registry pattern compiles");
        for desc in descriptions {
            let suggestion = suggest_name(desc, layer, None);
            assert!(
                pattern.is_match(&suggestion.primary),
                "{layer}: '{}' breaks the convention",
                suggestion.primary
            );
            for alt in &suggestion.alternatives {
                assert!(pattern.is_match(alt), "{layer}: alt '{alt}' breaks the convention");
            }
        }
    }
}

#[test]
fn entity_names_keep_the_wrapper_even_for_odd_input() {
    let suggestion = suggest_name("çã!!", LayerId::Entity, None);
    let pattern = taxonomy::naming_regex(LayerId::Entity).unwrap();
    assert!(pattern.is_match(&suggestion.primary));
}

// ── fallback safety ───────────────────────────────────────────────────────────

#[test]
fn broken_taxonomy_still_yields_a_valid_layer() {
    let result = classify_with(&[], "um botão qualquer", &[]);
    assert!(LayerId::ALL.contains(&result.primary.layer));
    assert!(result.confidence > 0.0);
}

#[test]
fn empty_input_never_panics_anywhere() {
    let service = AnalysisService::new();
    let analysis = service.analyze(&AnalysisRequest::new(""));
    assert!(LayerId::ALL.contains(&analysis.layer));
    assert!(!analysis.naming.primary.is_empty());
}
