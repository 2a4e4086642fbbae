//! Layer taxonomy registry.
//!
//! # Design Rationale
//!
//! Everything the domain knows about a layer lives in exactly one place: its
//! [`LayerProfile`] entry in [`LAYER_REGISTRY`]. Keyword sets, scoring
//! weights, the allowed-dependency hierarchy, and naming conventions are all
//! table lookups — no `match` arms on layers scattered across the codebase.
//!
//! # Adding a New Layer
//!
//! 1. Add a variant to [`LayerId`] (plus `as_str` / `FromStr` arms)
//! 2. Add one [`LayerProfile`] entry to [`LAYER_REGISTRY`]
//! 3. That's it — classification, dependency validation, and naming all
//!    derive from the registry
//!
//! # Hierarchy invariant
//!
//! The directed graph formed by `allowed_dependencies` must be acyclic. The
//! registry is hand-authored to guarantee this, but nothing downstream
//! assumes it: [`registry_is_acyclic`] re-checks with petgraph, and the
//! dependency analyzer reports a detected cycle as a hard violation.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::text;

// ── LayerId ──────────────────────────────────────────────────────────────────

/// One of the twelve architectural roles a generated component can fulfil.
///
/// The set is closed: adding a layer is a taxonomy change, not runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerId {
    Atom,
    Molecule,
    Organism,
    Template,
    Feature,
    Layout,
    Particle,
    Model,
    Entity,
    Util,
    Gateway,
    Repository,
}

impl LayerId {
    /// All layers, in hierarchy order (composition roots first).
    pub const ALL: [LayerId; 12] = [
        Self::Feature,
        Self::Layout,
        Self::Template,
        Self::Organism,
        Self::Molecule,
        Self::Atom,
        Self::Repository,
        Self::Gateway,
        Self::Model,
        Self::Particle,
        Self::Entity,
        Self::Util,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Molecule => "molecule",
            Self::Organism => "organism",
            Self::Template => "template",
            Self::Feature => "feature",
            Self::Layout => "layout",
            Self::Particle => "particle",
            Self::Model => "model",
            Self::Entity => "entity",
            Self::Util => "util",
            Self::Gateway => "gateway",
            Self::Repository => "repository",
        }
    }

    /// Whether this layer renders UI (affects the generated file manifest).
    pub const fn is_visual(self) -> bool {
        matches!(
            self,
            Self::Atom
                | Self::Molecule
                | Self::Organism
                | Self::Template
                | Self::Feature
                | Self::Layout
                | Self::Particle
        )
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "atom" | "atomo" => Ok(Self::Atom),
            "molecule" | "molecula" => Ok(Self::Molecule),
            "organism" | "organismo" => Ok(Self::Organism),
            "template" => Ok(Self::Template),
            "feature" | "funcionalidade" => Ok(Self::Feature),
            "layout" => Ok(Self::Layout),
            "particle" | "particula" => Ok(Self::Particle),
            "model" | "modelo" => Ok(Self::Model),
            "entity" | "entidade" => Ok(Self::Entity),
            "util" | "utils" | "utility" => Ok(Self::Util),
            "gateway" => Ok(Self::Gateway),
            "repository" | "repositorio" => Ok(Self::Repository),
            other => Err(DomainError::UnknownLayer {
                value: other.to_string(),
            }),
        }
    }
}

// ── Tiers ────────────────────────────────────────────────────────────────────

/// Expected implementation complexity of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// How reusable components of a layer tend to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reusability {
    Low,
    Medium,
    High,
}

impl Reusability {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

// ── LayerProfile ─────────────────────────────────────────────────────────────

/// Describes everything the domain needs to know about one layer.
///
/// Keywords are stored pre-normalised (lowercase, no diacritics) so matching
/// never re-normalises registry data; `assert_registry_integrity` enforces
/// this.
#[derive(Debug, Clone, Copy)]
pub struct LayerProfile {
    /// The layer this entry describes.
    pub layer: LayerId,

    /// Matching vocabulary, Portuguese and English side by side.
    pub keywords: &'static [&'static str],

    /// Expected implementation complexity tier.
    pub complexity: Complexity,

    /// Descriptive dependency label ("none", "atoms", "all", ...).
    ///
    /// Informational only. `allowed_dependencies` is the authoritative edge
    /// list for hierarchy validation.
    pub dependency_tier: &'static str,

    /// How reusable components of this layer tend to be.
    pub reusability: Reusability,

    /// Score multiplier. Tunes precedence between layers sharing keywords;
    /// the raw sub-score constants never change per layer, only this does.
    pub weight: f64,

    /// Layers this layer may declare as dependencies. Acyclic across the
    /// whole registry; a layer never lists itself.
    pub allowed_dependencies: &'static [LayerId],

    /// Regex a component name of this layer must satisfy.
    pub naming_pattern: &'static str,

    /// Name used when the suggester produces no valid candidate.
    pub fallback_name: &'static str,
}

/// Dash-case: `button`, `login-form`, `find-one-user`.
pub const DASH_CASE: &str = r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$";

/// Entity wrapper type: `TUserEntity`, `TOrderItemEntity`.
pub const ENTITY_CASE: &str = r"^T[A-Z][a-zA-Z]*Entity$";

/// Single source of truth for the twelve layers.
///
/// Ordering matches `LayerId::ALL` (composition roots first) but lookup is
/// exhaustive, so order is not semantic.
pub static LAYER_REGISTRY: &[LayerProfile] = &[
    LayerProfile {
        layer: LayerId::Feature,
        keywords: &[
            "tela", "pagina", "page", "screen", "fluxo", "flow", "funcionalidade",
            "feature", "login", "cadastro", "dashboard", "perfil", "checkout",
            "modulo",
        ],
        complexity: Complexity::High,
        dependency_tier: "all",
        reusability: Reusability::Low,
        weight: 1.5,
        allowed_dependencies: &[
            LayerId::Template,
            LayerId::Layout,
            LayerId::Organism,
            LayerId::Molecule,
            LayerId::Atom,
            LayerId::Model,
            LayerId::Repository,
            LayerId::Gateway,
            LayerId::Entity,
            LayerId::Util,
            LayerId::Particle,
        ],
        naming_pattern: DASH_CASE,
        fallback_name: "main-flow",
    },
    LayerProfile {
        layer: LayerId::Layout,
        keywords: &[
            "layout", "moldura", "frame", "wrapper", "container", "shell",
            "envolvente", "scaffold",
        ],
        complexity: Complexity::Medium,
        dependency_tier: "organisms+molecules+atoms",
        reusability: Reusability::Medium,
        weight: 1.0,
        allowed_dependencies: &[
            LayerId::Organism,
            LayerId::Molecule,
            LayerId::Atom,
            LayerId::Util,
            LayerId::Particle,
        ],
        naming_pattern: DASH_CASE,
        fallback_name: "app-shell",
    },
    LayerProfile {
        layer: LayerId::Template,
        keywords: &[
            "template", "estrutura", "structure", "esqueleto", "skeleton", "grid",
            "wireframe", "disposicao",
        ],
        complexity: Complexity::Medium,
        dependency_tier: "organisms+molecules+atoms",
        reusability: Reusability::Medium,
        weight: 1.1,
        allowed_dependencies: &[
            LayerId::Organism,
            LayerId::Molecule,
            LayerId::Atom,
            LayerId::Util,
            LayerId::Particle,
        ],
        naming_pattern: DASH_CASE,
        fallback_name: "page-template",
    },
    LayerProfile {
        layer: LayerId::Organism,
        keywords: &[
            "secao", "section", "header", "cabecalho", "footer", "rodape",
            "sidebar", "navbar", "navegacao", "lista", "list", "tabela", "table",
            "galeria", "complexo",
        ],
        complexity: Complexity::High,
        dependency_tier: "molecules+atoms",
        reusability: Reusability::Medium,
        weight: 1.3,
        allowed_dependencies: &[
            LayerId::Molecule,
            LayerId::Atom,
            LayerId::Util,
            LayerId::Particle,
            LayerId::Model,
        ],
        naming_pattern: DASH_CASE,
        fallback_name: "content-section",
    },
    LayerProfile {
        layer: LayerId::Molecule,
        keywords: &[
            "modal", "formulario", "form", "card", "cartao", "dropdown", "menu",
            "campo", "field", "grupo", "group", "composto", "combinacao",
            "confirmacao", "dialog",
        ],
        complexity: Complexity::Medium,
        dependency_tier: "atoms",
        reusability: Reusability::High,
        weight: 1.2,
        allowed_dependencies: &[LayerId::Atom, LayerId::Util, LayerId::Particle],
        naming_pattern: DASH_CASE,
        fallback_name: "form-group",
    },
    LayerProfile {
        layer: LayerId::Atom,
        keywords: &[
            "botao", "button", "btn", "icone", "icon", "input", "label", "texto",
            "badge", "avatar", "spinner", "atomo", "basico", "elemento",
            "reutilizavel", "reusable",
        ],
        complexity: Complexity::Low,
        dependency_tier: "none",
        reusability: Reusability::High,
        weight: 1.0,
        allowed_dependencies: &[LayerId::Util],
        naming_pattern: DASH_CASE,
        fallback_name: "base-element",
    },
    LayerProfile {
        layer: LayerId::Repository,
        keywords: &[
            "repositorio", "repository", "dados", "data", "persistencia",
            "persistence", "cache", "armazenamento", "storage", "fonte",
        ],
        complexity: Complexity::Medium,
        dependency_tier: "gateways+models+entities",
        reusability: Reusability::Medium,
        weight: 1.3,
        allowed_dependencies: &[
            LayerId::Gateway,
            LayerId::Model,
            LayerId::Entity,
            LayerId::Util,
        ],
        naming_pattern: DASH_CASE,
        fallback_name: "data-repository",
    },
    LayerProfile {
        layer: LayerId::Gateway,
        keywords: &[
            "gateway", "api", "requisicao", "request", "chamada", "call", "http",
            "endpoint", "fetch", "axios", "rest", "graphql",
        ],
        complexity: Complexity::Medium,
        dependency_tier: "entities",
        reusability: Reusability::Medium,
        weight: 1.2,
        allowed_dependencies: &[LayerId::Entity, LayerId::Util],
        naming_pattern: DASH_CASE,
        fallback_name: "find-one-resource",
    },
    LayerProfile {
        layer: LayerId::Model,
        keywords: &[
            "modelo", "model", "logica", "logic", "negocio", "business", "regra",
            "rule", "dominio", "domain",
        ],
        complexity: Complexity::Medium,
        dependency_tier: "entities",
        reusability: Reusability::Medium,
        weight: 1.1,
        allowed_dependencies: &[LayerId::Entity, LayerId::Util],
        naming_pattern: DASH_CASE,
        fallback_name: "domain-model",
    },
    LayerProfile {
        layer: LayerId::Particle,
        keywords: &[
            "contexto", "context", "provider", "provedor", "estado", "state",
            "compartilhado", "shared", "global", "store",
        ],
        complexity: Complexity::Medium,
        dependency_tier: "entities",
        reusability: Reusability::High,
        weight: 0.9,
        allowed_dependencies: &[LayerId::Entity, LayerId::Util],
        naming_pattern: DASH_CASE,
        fallback_name: "shared-state",
    },
    LayerProfile {
        layer: LayerId::Entity,
        keywords: &[
            "entidade", "entity", "tipo", "type", "interface", "contrato",
            "contract", "esquema", "schema", "dto",
        ],
        complexity: Complexity::Low,
        dependency_tier: "none",
        reusability: Reusability::High,
        weight: 0.8,
        allowed_dependencies: &[],
        naming_pattern: ENTITY_CASE,
        fallback_name: "TBaseEntity",
    },
    LayerProfile {
        layer: LayerId::Util,
        keywords: &[
            "util", "utilitario", "helper", "format", "formatar", "formatacao",
            "validar", "validacao", "converter", "conversao", "calcular", "parse",
            "mascara", "mask",
        ],
        complexity: Complexity::Low,
        dependency_tier: "none",
        reusability: Reusability::High,
        weight: 0.7,
        allowed_dependencies: &[],
        naming_pattern: DASH_CASE,
        fallback_name: "format-value",
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────
//
// These functions are the ONLY entry points for taxonomy queries.
// Do not write `match` arms on layers elsewhere.

/// Find the profile for a layer in an arbitrary registry slice.
///
/// Takes the registry as a parameter so tests can run against alternate
/// taxonomies; production code goes through [`profile`].
pub fn find_layer(registry: &[LayerProfile], layer: LayerId) -> Option<&LayerProfile> {
    registry.iter().find(|p| p.layer == layer)
}

/// Profile lookup against the built-in registry.
///
/// Returns `None` only if the layer is unregistered — a programming error,
/// not a user error. The `assert_registry_integrity` test catches it.
pub fn profile(layer: LayerId) -> Option<&'static LayerProfile> {
    LAYER_REGISTRY.iter().find(|p| p.layer == layer)
}

/// Layers `layer` may depend on, per the built-in registry.
pub fn allowed_dependencies(layer: LayerId) -> &'static [LayerId] {
    profile(layer).map(|p| p.allowed_dependencies).unwrap_or(&[])
}

/// Check the `allowed_dependencies` graph of a registry for cycles.
///
/// The hand-authored registry is acyclic by construction; this check exists
/// so the dependency analyzer can treat a cycle as a hard violation instead
/// of trusting the authoring.
pub fn registry_is_acyclic(registry: &[LayerProfile]) -> bool {
    let mut graph: DiGraph<LayerId, ()> = DiGraph::new();
    let mut nodes = HashMap::new();

    for p in registry {
        nodes.entry(p.layer).or_insert_with(|| graph.add_node(p.layer));
    }
    for p in registry {
        let from = nodes[&p.layer];
        for dep in p.allowed_dependencies {
            let to = *nodes.entry(*dep).or_insert_with(|| graph.add_node(*dep));
            graph.add_edge(from, to, ());
        }
    }

    !is_cyclic_directed(&graph)
}

// ── Naming patterns ───────────────────────────────────────────────────────────

static NAMING_REGEXES: Lazy<HashMap<LayerId, Regex>> = Lazy::new(|| {
    LAYER_REGISTRY
        .iter()
        .filter_map(|p| Regex::new(p.naming_pattern).ok().map(|re| (p.layer, re)))
        .collect()
});

/// Compiled naming pattern for a layer.
///
/// `None` means the registry entry carries an invalid pattern — callers fall
/// back to [`DASH_CASE`] semantics rather than failing, since naming must
/// always produce a usable result.
pub fn naming_regex(layer: LayerId) -> Option<&'static Regex> {
    NAMING_REGEXES.get(&layer)
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
/// Catches authoring errors at development time, not at user runtime.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    assert_eq!(
        LAYER_REGISTRY.len(),
        LayerId::ALL.len(),
        "registry must describe every layer exactly once"
    );

    for layer in LayerId::ALL {
        assert!(
            profile(layer).is_some(),
            "Layer {layer} has no registry entry"
        );
    }

    for p in LAYER_REGISTRY {
        assert!(
            p.weight.is_finite() && p.weight > 0.0,
            "Layer {}: weight must be a positive finite number",
            p.layer
        );

        assert!(
            !p.keywords.is_empty(),
            "Layer {}: keyword set is empty",
            p.layer
        );

        for kw in p.keywords {
            assert_eq!(
                text::normalize(kw),
                **kw,
                "Layer {}: keyword '{}' is not stored normalised",
                p.layer,
                kw
            );
        }

        assert!(
            !p.allowed_dependencies.contains(&p.layer),
            "Layer {}: lists itself as an allowed dependency",
            p.layer
        );

        assert!(
            Regex::new(p.naming_pattern).is_ok(),
            "Layer {}: naming pattern does not compile",
            p.layer
        );

        let re = Regex::new(p.naming_pattern).unwrap();
        assert!(
            re.is_match(p.fallback_name),
            "Layer {}: fallback name '{}' violates its own naming pattern",
            p.layer,
            p.fallback_name
        );
    }

    assert!(
        registry_is_acyclic(LAYER_REGISTRY),
        "allowed_dependencies graph contains a cycle"
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
