//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "analyze this component description end to end".

pub mod analysis_service;

pub use analysis_service::{AnalysisRequest, AnalysisService, ComponentAnalysis};
