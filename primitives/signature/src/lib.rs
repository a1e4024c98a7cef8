#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! wrapgen signature model
//!
//! This crate defines the core structures that represent a scanned method
//! signature between extraction and code generation: the raw per-declaration
//! capture (`SignatureMatch`) and the tokenized parameter / return-value
//! descriptors (`ParamDescriptor`) that the templates consume.

pub mod signature_model;

// Re-export the main signature types for convenience
pub use signature_model::*;
