//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! component-analysis tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (AnalysisService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: AnalysisProvider)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     strata-adapters (Infrastructure)    │
//! │   (SimulatedProvider, ScriptedProvider) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Taxonomy, Classifier, Dependencies,   │
//! │   Naming, Lint — no I/O, no network)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use strata_core::application::{AnalysisRequest, AnalysisService};
//!
//! let service = AnalysisService::new(); // heuristic mode, zero dependencies
//! let analysis = service.analyze(&AnalysisRequest::new("um botão reutilizável"));
//!
//! assert_eq!(analysis.layer.as_str(), "atom");
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AnalysisRequest, AnalysisService, ComponentAnalysis,
        ports::{AnalysisProvider, PartialAnalysis, ProviderContext},
    };
    pub use crate::domain::{
        ClassificationResult, CodeReview, DependencySet, LayerId, NamingContext,
        NamingSuggestion, Severity, Violation, analyze_code, analyze_dependencies, classify,
        suggest_name,
    };
    pub use crate::error::{StrataError, StrataResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
