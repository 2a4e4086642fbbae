// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! Pure analysis logic: the layer taxonomy, the text normaliser, the
//! classifier, the dependency analyzer, the naming suggester, and the
//! convention linter. Every operation here is a stateless pure function over
//! its inputs and the static taxonomy.
//!
//! ## Boundaries
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No subscribers**: the domain *emits* tracing events, it never
//!   initialises logging
//! - **Immutable results**: every result type is a value object; nothing is
//!   cached or shared between calls

// Public API - what the world sees
pub mod classifier;
pub mod dependencies;
pub mod error;
pub mod lint;
pub mod naming;
pub mod taxonomy;
pub mod text;

// Re-exports for convenience
pub use classifier::{ClassificationCandidate, ClassificationResult, classify, classify_with};
pub use dependencies::{
    DependencySet, HierarchyCheck, ManifestEntry, Severity, Violation, ViolationKind,
    analyze_dependencies, check_hierarchy, file_manifest, validate_dependency_set,
};
pub use error::{DomainError, ErrorCategory};
pub use lint::{CodeReview, LintViolation, analyze_code};
pub use naming::{NamingContext, NamingSuggestion, suggest_name};
pub use taxonomy::{Complexity, LAYER_REGISTRY, LayerId, LayerProfile, Reusability};
