//! Layer convention linter.
//!
//! A lightweight textual pass over generated or hand-written component code.
//! Rules are substring and regex heuristics — this is a linting aid, not a
//! parser, and false negatives are acceptable. Findings are data; the caller
//! decides what blocks.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::domain::dependencies::Severity;
use crate::domain::taxonomy::LayerId;

// ── Result types ─────────────────────────────────────────────────────────────

/// One convention finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintViolation {
    /// Stable rule identifier, kebab-case.
    pub rule: &'static str,
    pub description: String,
    pub severity: Severity,
    pub suggestion: String,
}

/// Outcome of a lint pass: findings plus a 0–100 quality score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeReview {
    pub violations: Vec<LintViolation>,
    pub score: u8,
}

// ── Rule configuration ───────────────────────────────────────────────────────

/// Layers whose components must route logic through a use-case.
const USE_CASE_REQUIRED: [LayerId; 3] = [LayerId::Molecule, LayerId::Organism, LayerId::Feature];

/// Layers that must stay presentational: no use-case, no business logic.
const USE_CASE_FORBIDDEN: [LayerId; 2] = [LayerId::Atom, LayerId::Util];

/// Import path segments each layer must not reference directly.
fn banned_import_segments(layer: LayerId) -> &'static [&'static str] {
    match layer {
        LayerId::Atom => &["molecules/", "organisms/", "templates/", "features/"],
        LayerId::Molecule => &["organisms/", "templates/", "features/"],
        LayerId::Organism => &["templates/", "features/"],
        LayerId::Template | LayerId::Layout => &["features/"],
        LayerId::Util | LayerId::Entity => &[
            "atoms/",
            "molecules/",
            "organisms/",
            "templates/",
            "features/",
        ],
        _ => &[],
    }
}

static ANY_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*any\b|\bas\s+any\b|<any>").expect("static pattern"));

static IMPORT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^\s*import\b.*from\s+['"]([^'"]+)['"]"#).expect("static pattern"));

static FUNCTION_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfunction\b|=>").expect("static pattern"));

const LONG_FILE_LINES: usize = 200;
const MANY_FUNCTIONS: usize = 15;

// ── Lint pass ────────────────────────────────────────────────────────────────

/// Check `code` against the conventions of `layer`.
pub fn analyze_code(code: &str, layer: LayerId) -> CodeReview {
    let mut violations = Vec::new();

    check_use_case(code, layer, &mut violations);
    check_partials(code, layer, &mut violations);
    check_imports(code, layer, &mut violations);
    check_module_prefix(code, layer, &mut violations);
    check_react_purity(code, layer, &mut violations);
    check_debug_statements(code, &mut violations);
    check_any_types(code, &mut violations);

    let score = compute_score(code, &violations);

    debug!(
        layer = %layer,
        findings = violations.len(),
        score,
        "code reviewed"
    );

    CodeReview { violations, score }
}

fn has_use_case(code: &str) -> bool {
    code.contains("UseCase") || code.contains("use-case")
}

fn check_use_case(code: &str, layer: LayerId, out: &mut Vec<LintViolation>) {
    if USE_CASE_REQUIRED.contains(&layer) && !has_use_case(code) {
        let severity = if layer == LayerId::Molecule {
            Severity::Warning
        } else {
            Severity::Error
        };
        out.push(LintViolation {
            rule: "use-case-required",
            description: format!("{layer} components must route behaviour through a use-case"),
            severity,
            suggestion: "Extract the component's logic into a use-case file and import it".into(),
        });
    }

    if USE_CASE_FORBIDDEN.contains(&layer) && has_use_case(code) {
        out.push(LintViolation {
            rule: "use-case-forbidden",
            description: format!("{layer} components must stay presentational"),
            severity: Severity::Error,
            suggestion: "Move the use-case up to the molecule or organism that composes this"
                .into(),
        });
    }
}

fn check_partials(code: &str, layer: LayerId, out: &mut Vec<LintViolation>) {
    let below_organism = matches!(layer, LayerId::Atom | LayerId::Molecule);
    if below_organism && (code.contains("partials/") || code.contains(".partial")) {
        out.push(LintViolation {
            rule: "partial-forbidden",
            description: format!("{layer} components cannot be split into partials"),
            severity: Severity::Warning,
            suggestion: "Only organisms and above may own partial components".into(),
        });
    }
}

fn check_imports(code: &str, layer: LayerId, out: &mut Vec<LintViolation>) {
    let banned = banned_import_segments(layer);
    if banned.is_empty() {
        return;
    }

    for capture in IMPORT_LINE.captures_iter(code) {
        let path = &capture[1];
        for segment in banned {
            if path.contains(segment) {
                out.push(LintViolation {
                    rule: "cross-layer-import",
                    description: format!(
                        "{layer} imports from '{path}', which sits above it in the hierarchy"
                    ),
                    severity: Severity::Error,
                    suggestion: "Invert the relationship: the higher layer composes the lower one"
                        .into(),
                });
            }
        }
    }
}

fn check_module_prefix(code: &str, layer: LayerId, out: &mut Vec<LintViolation>) {
    if layer != LayerId::Feature {
        return;
    }

    for capture in IMPORT_LINE.captures_iter(code) {
        let path = &capture[1];
        if let Some(rest) = path.split("features/").nth(1) {
            let module = rest.split('/').next().unwrap_or("");
            if !module.is_empty() && !module.contains('-') {
                out.push(LintViolation {
                    rule: "module-prefix",
                    description: format!(
                        "feature module '{module}' is not prefixed (expected '<module>-<name>')"
                    ),
                    severity: Severity::Warning,
                    suggestion: "Name feature modules with their owning module as prefix".into(),
                });
            }
        }
    }
}

fn check_react_purity(code: &str, layer: LayerId, out: &mut Vec<LintViolation>) {
    if layer != LayerId::Util {
        return;
    }

    const REACT_MARKERS: [&str; 5] = [
        "useState",
        "useEffect",
        "useContext",
        "from 'react'",
        "from \"react\"",
    ];
    if REACT_MARKERS.iter().any(|m| code.contains(m)) {
        out.push(LintViolation {
            rule: "react-purity",
            description: "utils must be plain functions with no React coupling".into(),
            severity: Severity::Error,
            suggestion: "Move hook usage into a particle or the consuming component".into(),
        });
    }
}

fn check_debug_statements(code: &str, out: &mut Vec<LintViolation>) {
    const DEBUG_MARKERS: [&str; 3] = ["console.log", "console.debug", "debugger"];
    for marker in DEBUG_MARKERS {
        if code.contains(marker) {
            out.push(LintViolation {
                rule: "no-debug",
                description: format!("debug statement '{marker}' left in code"),
                severity: Severity::Warning,
                suggestion: "Remove it or replace it with the project logger".into(),
            });
        }
    }
}

fn check_any_types(code: &str, out: &mut Vec<LintViolation>) {
    if ANY_TYPE.is_match(code) {
        out.push(LintViolation {
            rule: "no-any",
            description: "untyped 'any' defeats the entity contracts".into(),
            severity: Severity::Warning,
            suggestion: "Type the value with an entity or a generic parameter".into(),
        });
    }
}

// ── Scoring ──────────────────────────────────────────────────────────────────

/// 100 minus violation penalties (error −15, warning −5) minus simple size
/// penalties, clamped to 0–100.
fn compute_score(code: &str, violations: &[LintViolation]) -> u8 {
    let mut score: i64 = 100;

    for v in violations {
        score -= match v.severity {
            Severity::Error => 15,
            Severity::Warning => 5,
        };
    }

    if code.lines().count() > LONG_FILE_LINES {
        score -= 10;
    }
    if FUNCTION_DECL.find_iter(code).count() > MANY_FUNCTIONS {
        score -= 5;
    }

    score.clamp(0, 100) as u8
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(review: &CodeReview) -> Vec<&'static str> {
        review.violations.iter().map(|v| v.rule).collect()
    }

    #[test]
    fn clean_atom_scores_full_marks() {
        let code = r#"
import { colors } from 'utils/theme';

export const Button = ({ label }: TButtonProps) => (
  <button>{label}</button>
);
"#;
        let review = analyze_code(code, LayerId::Atom);
        assert!(review.violations.is_empty(), "{:?}", review.violations);
        assert_eq!(review.score, 100);
    }

    #[test]
    fn feature_without_use_case_is_an_error() {
        let review = analyze_code("export const Login = () => null;", LayerId::Feature);
        assert!(rules(&review).contains(&"use-case-required"));
        assert!(
            review
                .violations
                .iter()
                .any(|v| v.rule == "use-case-required" && v.severity == Severity::Error)
        );
    }

    #[test]
    fn molecule_without_use_case_is_only_a_warning() {
        let review = analyze_code("export const Modal = () => null;", LayerId::Molecule);
        let v = review
            .violations
            .iter()
            .find(|v| v.rule == "use-case-required")
            .unwrap();
        assert_eq!(v.severity, Severity::Warning);
    }

    #[test]
    fn atom_with_use_case_is_flagged() {
        let code = "import { loginUseCase } from './login.use-case';";
        let review = analyze_code(code, LayerId::Atom);
        assert!(rules(&review).contains(&"use-case-forbidden"));
    }

    #[test]
    fn molecule_with_partials_is_flagged() {
        let code = r#"
import { Header } from './partials/header';
import { runUseCase } from './modal.use-case';
"#;
        let review = analyze_code(code, LayerId::Molecule);
        assert!(rules(&review).contains(&"partial-forbidden"));
    }

    #[test]
    fn atom_importing_an_organism_is_flagged() {
        let code = "import { Navbar } from 'components/organisms/navbar';";
        let review = analyze_code(code, LayerId::Atom);
        assert!(rules(&review).contains(&"cross-layer-import"));
    }

    #[test]
    fn feature_may_import_from_anywhere_below() {
        let code = r#"
import { Page } from 'components/templates/page';
import { Navbar } from 'components/organisms/navbar';
import { loginUseCase } from './login.use-case';
"#;
        let review = analyze_code(code, LayerId::Feature);
        assert!(!rules(&review).contains(&"cross-layer-import"));
    }

    #[test]
    fn unprefixed_feature_module_is_flagged() {
        let code = r#"
import { helper } from 'features/login/helper';
import { run } from './login.use-case';
"#;
        let review = analyze_code(code, LayerId::Feature);
        assert!(rules(&review).contains(&"module-prefix"));
    }

    #[test]
    fn prefixed_feature_module_passes() {
        let code = r#"
import { helper } from 'features/auth-login/helper';
import { run } from './login.use-case';
"#;
        let review = analyze_code(code, LayerId::Feature);
        assert!(!rules(&review).contains(&"module-prefix"));
    }

    #[test]
    fn util_with_react_hooks_is_flagged() {
        let code = "import { useState } from 'react';";
        let review = analyze_code(code, LayerId::Util);
        assert!(rules(&review).contains(&"react-purity"));
    }

    #[test]
    fn console_log_is_flagged_on_any_layer() {
        let review = analyze_code("console.log('here');", LayerId::Gateway);
        assert!(rules(&review).contains(&"no-debug"));
    }

    #[test]
    fn any_type_is_flagged() {
        for code in ["const x: any = 1;", "fn(value as any)", "Array<any>"] {
            let review = analyze_code(code, LayerId::Model);
            assert!(rules(&review).contains(&"no-any"), "missed: {code}");
        }
    }

    #[test]
    fn anyone_identifier_is_not_flagged() {
        let review = analyze_code("const anyone = invite();", LayerId::Model);
        assert!(!rules(&review).contains(&"no-any"));
    }

    // ── scoring ──────────────────────────────────────────────────────────────

    #[test]
    fn errors_cost_fifteen_warnings_cost_five() {
        // One error (use-case required on feature) + one warning (console.log).
        let review = analyze_code("console.log('x');", LayerId::Feature);
        assert_eq!(review.score, 100 - 15 - 5);
    }

    #[test]
    fn long_files_lose_points() {
        let mut code = String::from("import { x } from './x.use-case';\n");
        for i in 0..250 {
            code.push_str(&format!("const v{i} = {i};\n"));
        }
        let review = analyze_code(&code, LayerId::Organism);
        assert_eq!(review.score, 90);
    }

    #[test]
    fn score_never_goes_negative() {
        let code = r#"
import { a } from 'components/molecules/a';
import { b } from 'components/organisms/b';
import { c } from 'components/templates/c';
import { d } from 'components/features/d';
import { e } from './e.use-case';
console.log(1);
debugger;
const x: any = 1;
"#;
        let review = analyze_code(code, LayerId::Atom);
        assert!(review.score <= 100);
        // 4 cross-layer errors + use-case-forbidden error + 3 warnings ≥ 90 points.
        assert!(review.score <= 10);
    }

    #[test]
    fn lint_is_deterministic() {
        let code = "console.log('x'); const y: any = 2;";
        assert_eq!(
            analyze_code(code, LayerId::Model),
            analyze_code(code, LayerId::Model)
        );
    }
}
