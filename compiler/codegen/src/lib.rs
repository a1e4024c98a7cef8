#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Template rendering for wrapgen.
//!
//! This crate turns extracted signatures into generated source text. It
//! focuses solely on rendering: a minimal section/placeholder template
//! language, the six template contracts the generator depends on, and the
//! loading of template assets from disk or from the bundled defaults.
//!
//! Other responsibilities—scanning input text, filtering, and pipeline
//! orchestration—reside in companion crates.

use std::path::PathBuf;

use thiserror::Error;

pub mod contexts;
pub mod template;
pub mod template_set;

pub use contexts::{
    ArgsData, ClientAggregateData, ClientMethodData, RetvalData, ServiceAggregateData,
    ServiceMethodData,
};
pub use template::{RenderContext, Template, Value};
pub use template_set::{TemplateSet, TemplateSources};

/// Error type for template operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A template asset could not be read from disk.
    #[error("failed to read template '{name}' from {path}")]
    TemplateRead {
        /// Template name (e.g., `args`).
        name: String,
        /// Path the template was expected at.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A template asset is syntactically invalid.
    #[error("template '{name}' failed to parse: {reason}")]
    TemplateParse {
        /// Template name.
        name: String,
        /// What the parser objected to.
        reason: String,
    },
    /// A template referenced data its render context does not supply.
    #[error("Template is not consistent with data: {0}")]
    TemplateMismatch(String),
    /// A pattern used by the template scanner failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
    /// Underlying I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenient result type for template functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;
