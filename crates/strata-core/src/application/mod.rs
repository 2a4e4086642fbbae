//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AnalysisService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! analysis logic itself. All scoring and validation rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{AnalysisRequest, AnalysisService, ComponentAnalysis};

// Re-export port types (for adapter implementation)
pub use ports::{AnalysisProvider, PartialAnalysis, ProviderContext};

pub use error::ApplicationError;
