#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns a file of method signatures into
//! service/client boilerplate by orchestrating extraction and rendering.
//!
//! ## Module Organization
//!
//! - `orchestration` - The `Generator` driver: match → filter → tokenize →
//!   normalize → render → aggregate.

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the generation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
    /// Error from signature extraction.
    #[error(transparent)]
    Extract(#[from] extract::ExtractError),
    /// Error propagated from template rendering.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// I/O error while reading input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// Module declarations
pub mod orchestration;

// Re-export public API from orchestration module
pub use orchestration::{GenerateRequest, GeneratedOutput, Generator};
