//! Dependency derivation and hierarchy validation.
//!
//! Given a chosen layer and a description, derive which layers the new
//! component should depend on, then validate the whole set against the
//! taxonomy's allowed-dependency hierarchy. Violations are reported as data
//! (`Violation`), never thrown — callers decide whether a violation blocks
//! generation.
//!
//! The circular check here is deliberately naive: it only flags a layer that
//! appears in its own dependency list. Multi-hop cycles cannot occur as long
//! as the registry is acyclic, and the registry itself is re-checked with a
//! real graph-cycle pass on every call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::taxonomy::{self, LAYER_REGISTRY, LayerId, LayerProfile};
use crate::domain::text;

// ── Result types ─────────────────────────────────────────────────────────────

/// How severe a violation is for downstream tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What kind of dependency rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    InvalidLayer,
    MissingDependency,
    Circular,
}

/// One dependency-rule violation, with a remediation hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
    pub severity: Severity,
    pub suggestion: String,
}

/// Outcome of validating a dependency list against the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyCheck {
    pub is_valid: bool,
    pub violations: Vec<String>,
    pub allowed_dependencies: Vec<LayerId>,
}

/// One file the scaffolder would generate for a component.
///
/// Paths carry a literal `{name}` placeholder; the consumer substitutes the
/// chosen component name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: &'static str,
    pub required: bool,
}

/// Full dependency analysis for one component. Created per call, not cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencySet {
    pub required: Vec<LayerId>,
    pub optional: Vec<LayerId>,
    pub violations: Vec<Violation>,
    pub hierarchy: HierarchyCheck,
    pub manifest: Vec<ManifestEntry>,
}

// ── Detection vocabulary ─────────────────────────────────────────────────────

static UI_ELEMENT_WORDS: &[&str] = &[
    "botao", "button", "input", "campo", "field", "icone", "icon", "label",
];

static COMPLEX_UI_WORDS: &[&str] = &[
    "formulario", "form", "lista", "list", "tabela", "table", "secao",
    "section", "menu", "navegacao", "complexo",
];

static BUSINESS_WORDS: &[&str] = &[
    "logica", "negocio", "business", "regra", "rule", "servico", "service",
    "processo", "calculo",
];

static API_WORDS: &[&str] = &[
    "api", "chamada", "requisicao", "request", "endpoint", "http", "fetch",
    "backend", "servidor",
];

static TRANSFORM_WORDS: &[&str] = &[
    "transformar", "transform", "mapear", "map", "converter", "convert",
    "normalizar",
];

static FORMATTING_WORDS: &[&str] = &["formatar", "format", "formatacao", "mascara", "mask"];

static VALIDATION_WORDS: &[&str] = &["validar", "validacao", "validate", "validation"];

static SHARED_STATE_WORDS: &[&str] = &[
    "estado", "state", "compartilhado", "shared", "global", "contexto",
    "context",
];

static SHARED_SERVICE_WORDS: &[&str] = &["singleton", "sessao", "session"];

fn mentions(ndesc: &str, words: &[&str]) -> bool {
    words.iter().any(|w| ndesc.contains(w))
}

// ── Analysis ─────────────────────────────────────────────────────────────────

/// Derive and validate the dependency set for a component.
///
/// `features` are caller-supplied flags; the literal flags `"validation"`,
/// `"formatting"`, and `"state-management"` force dependencies independent
/// of what the description says.
pub fn analyze_dependencies(
    description: &str,
    layer: LayerId,
    features: &[String],
) -> DependencySet {
    analyze_dependencies_with(LAYER_REGISTRY, description, layer, features)
}

/// Same as [`analyze_dependencies`] against an explicit registry.
pub fn analyze_dependencies_with(
    registry: &[LayerProfile],
    description: &str,
    layer: LayerId,
    features: &[String],
) -> DependencySet {
    let ndesc = text::normalize(description);

    let required = derive_required(&ndesc, layer, features);
    let optional = derive_optional(&ndesc);

    let hierarchy = check_hierarchy_with(registry, layer, &union(&required, &optional));
    let violations = validate_dependency_set_with(registry, layer, &required, &optional);
    let manifest = file_manifest(layer).to_vec();

    debug!(
        layer = %layer,
        required = required.len(),
        optional = optional.len(),
        violations = violations.len(),
        "dependencies analyzed"
    );

    DependencySet {
        required,
        optional,
        violations,
        hierarchy,
        manifest,
    }
}

/// Deterministic required-dependency switch.
fn derive_required(ndesc: &str, layer: LayerId, features: &[String]) -> Vec<LayerId> {
    let mut required = Vec::new();

    match layer {
        LayerId::Molecule => {
            if mentions(ndesc, UI_ELEMENT_WORDS) {
                required.push(LayerId::Atom);
            }
        }
        LayerId::Organism => {
            if mentions(ndesc, COMPLEX_UI_WORDS) {
                required.push(LayerId::Molecule);
                required.push(LayerId::Atom);
            }
        }
        LayerId::Template => {
            required.extend([LayerId::Organism, LayerId::Molecule, LayerId::Atom]);
        }
        LayerId::Feature => {
            required.push(LayerId::Template);
            if mentions(ndesc, BUSINESS_WORDS) {
                required.push(LayerId::Model);
                required.push(LayerId::Repository);
            }
            if mentions(ndesc, API_WORDS) {
                required.push(LayerId::Gateway);
                required.push(LayerId::Entity);
            }
        }
        LayerId::Repository => {
            required.push(LayerId::Gateway);
            required.push(LayerId::Entity);
            if mentions(ndesc, TRANSFORM_WORDS) {
                required.push(LayerId::Model);
            }
        }
        LayerId::Gateway | LayerId::Model => {
            required.push(LayerId::Entity);
        }
        LayerId::Atom
        | LayerId::Layout
        | LayerId::Particle
        | LayerId::Entity
        | LayerId::Util => {}
    }

    // Caller flags force dependencies regardless of the description.
    for feature in features {
        match feature.as_str() {
            "validation" | "formatting" => required.push(LayerId::Util),
            "state-management" => required.push(LayerId::Particle),
            _ => {}
        }
    }

    dedupe(required)
}

/// Keyword-driven optional dependencies, independent of the required set.
fn derive_optional(ndesc: &str) -> Vec<LayerId> {
    let mut optional = Vec::new();

    if mentions(ndesc, FORMATTING_WORDS) || mentions(ndesc, VALIDATION_WORDS) {
        optional.push(LayerId::Util);
    }
    if mentions(ndesc, SHARED_STATE_WORDS) || mentions(ndesc, SHARED_SERVICE_WORDS) {
        optional.push(LayerId::Particle);
    }

    dedupe(optional)
}

// ── Hierarchy validation ─────────────────────────────────────────────────────

/// Validate a dependency list against the built-in hierarchy.
pub fn check_hierarchy(layer: LayerId, dependencies: &[LayerId]) -> HierarchyCheck {
    check_hierarchy_with(LAYER_REGISTRY, layer, dependencies)
}

/// Validate a dependency list against an explicit registry.
pub fn check_hierarchy_with(
    registry: &[LayerProfile],
    layer: LayerId,
    dependencies: &[LayerId],
) -> HierarchyCheck {
    let allowed: Vec<LayerId> = taxonomy::find_layer(registry, layer)
        .map(|p| p.allowed_dependencies.to_vec())
        .unwrap_or_default();

    let violations: Vec<String> = dependencies
        .iter()
        .filter(|dep| !allowed.contains(dep))
        .map(|dep| format!("Layer '{layer}' cannot depend on '{dep}'"))
        .collect();

    HierarchyCheck {
        is_valid: violations.is_empty(),
        violations,
        allowed_dependencies: allowed,
    }
}

/// Full violation report for a (layer, required, optional) triple.
pub fn validate_dependency_set(
    layer: LayerId,
    required: &[LayerId],
    optional: &[LayerId],
) -> Vec<Violation> {
    validate_dependency_set_with(LAYER_REGISTRY, layer, required, optional)
}

/// Same as [`validate_dependency_set`] against an explicit registry.
pub fn validate_dependency_set_with(
    registry: &[LayerProfile],
    layer: LayerId,
    required: &[LayerId],
    optional: &[LayerId],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let combined = union(required, optional);

    // The registry is acyclic by construction, but never assume: a cycle in
    // an injected taxonomy is a hard violation, not undefined behaviour.
    if !taxonomy::registry_is_acyclic(registry) {
        violations.push(Violation {
            kind: ViolationKind::Circular,
            message: "Layer hierarchy contains a dependency cycle".into(),
            severity: Severity::Error,
            suggestion: "Fix the taxonomy so allowed dependencies form a DAG".into(),
        });
    }

    // Hierarchy edges.
    let hierarchy = check_hierarchy_with(registry, layer, &combined);
    for message in &hierarchy.violations {
        violations.push(Violation {
            kind: ViolationKind::InvalidLayer,
            message: message.clone(),
            severity: Severity::Error,
            suggestion: format!(
                "Remove the dependency or move the component above '{layer}' in the hierarchy"
            ),
        });
    }

    // Layer-specific soft rules.
    if layer == LayerId::Molecule && !required.contains(&LayerId::Atom) {
        violations.push(Violation {
            kind: ViolationKind::MissingDependency,
            message: "Molecules usually compose at least one atom".into(),
            severity: Severity::Warning,
            suggestion: "Mention the atoms this molecule is built from, or reconsider the layer"
                .into(),
        });
    }

    if layer == LayerId::Feature && !required.contains(&LayerId::Template) {
        violations.push(Violation {
            kind: ViolationKind::MissingDependency,
            message: "Features must be laid out by a template".into(),
            severity: Severity::Error,
            suggestion: "Add a template dependency for the feature's page structure".into(),
        });
    }

    // Self-reference. Multi-hop cycles are covered by the registry check.
    if combined.contains(&layer) {
        violations.push(Violation {
            kind: ViolationKind::Circular,
            message: format!("Layer '{layer}' cannot depend on itself"),
            severity: Severity::Error,
            suggestion: "Remove the self-referencing dependency".into(),
        });
    }

    violations
}

// ── File manifests ───────────────────────────────────────────────────────────

/// Files the scaffolder generates for a component of `layer`.
///
/// Fixed per-layer tables; `{name}` is substituted by the consumer. UI
/// layers get a `.tsx` component plus a type file; molecules, organisms,
/// and features additionally get a mandatory use-case file.
pub fn file_manifest(layer: LayerId) -> &'static [ManifestEntry] {
    const REQUIRED: bool = true;
    const OPTIONAL: bool = false;

    match layer {
        LayerId::Atom => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.atom.tsx", required: REQUIRED },
            ManifestEntry { path: "{name}.type.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.stories.tsx", required: OPTIONAL },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Molecule => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.molecule.tsx", required: REQUIRED },
            ManifestEntry { path: "{name}.type.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.use-case.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.stories.tsx", required: OPTIONAL },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Organism => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.organism.tsx", required: REQUIRED },
            ManifestEntry { path: "{name}.type.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.use-case.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.stories.tsx", required: OPTIONAL },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Template => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.template.tsx", required: REQUIRED },
            ManifestEntry { path: "{name}.type.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Feature => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.feature.tsx", required: REQUIRED },
            ManifestEntry { path: "{name}.type.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.use-case.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Layout => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.layout.tsx", required: REQUIRED },
            ManifestEntry { path: "{name}.type.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Particle => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.particle.tsx", required: REQUIRED },
            ManifestEntry { path: "{name}.type.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Model => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.model.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Entity => &[
            ManifestEntry { path: "{name}.entity.ts", required: REQUIRED },
        ],
        LayerId::Util => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.util.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Gateway => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.gateway.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
        LayerId::Repository => &[
            ManifestEntry { path: "index.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.repository.ts", required: REQUIRED },
            ManifestEntry { path: "{name}.spec.ts", required: OPTIONAL },
        ],
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn dedupe(layers: Vec<LayerId>) -> Vec<LayerId> {
    let mut seen = Vec::with_capacity(layers.len());
    for layer in layers {
        if !seen.contains(&layer) {
            seen.push(layer);
        }
    }
    seen
}

fn union(required: &[LayerId], optional: &[LayerId]) -> Vec<LayerId> {
    let mut combined = required.to_vec();
    combined.extend_from_slice(optional);
    dedupe(combined)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
