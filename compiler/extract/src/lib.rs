#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! wrapgen signature extraction
//!
//! This crate provides the extraction components of the wrapgen pipeline:
//! the pattern-based signature matcher, the parameter tokenizer, the
//! receiver filter, and the return-value normalizer. They operate on raw
//! input text and produce the structures in `wrapgen-signature` that code
//! generation consumes.

use thiserror::Error;

// Import all extraction components
pub mod filter;
pub mod matcher;
pub mod normalizer;
pub mod tokenizer;

// Re-export extraction types
pub use filter::filter_matches;
pub use matcher::SignatureMatcher;
pub use normalizer::normalize_returns;
pub use tokenizer::ParamTokenizer;

/// Convenient result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur during signature extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
    /// A matched method declared no return values, so there is no trailing
    /// error slot to drop.
    #[error("method '{method}' has no return values; expected a trailing error result")]
    MissingErrorSlot {
        /// Name of the offending method.
        method: String,
    },
}
