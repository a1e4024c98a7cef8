//! Parameter-list tokenization
//!
//! Splits the raw text of a parameter list or return-value list into
//! ordered `ParamDescriptor`s. The pattern scans tokens directly rather
//! than splitting on commas, so stray whitespace and missing names are
//! tolerated.

use regex::Regex;
use signature::ParamDescriptor;

use crate::Result;

/// The token pattern: an optional leading identifier-plus-whitespace as
/// the name, then a type token built from word characters and the
/// punctuation that appears in composite type expressions.
const PARAM_PATTERN: &str = r"(?P<pname>\w+\s+)?(?P<ptype>[\w\*\{\}\[\]\.]+)";

/// Tokenizes raw parameter/return-value text.
#[derive(Debug)]
pub struct ParamTokenizer {
    pattern: Regex,
}

impl ParamTokenizer {
    /// Compile the parameter pattern.
    pub fn new() -> Result<Self> { Ok(Self { pattern: Regex::new(PARAM_PATTERN)? }) }

    /// Tokenize `raw` into descriptors, in declaration order.
    ///
    /// A token with no name capture yields a descriptor with an empty
    /// name. Empty or whitespace-only input yields an empty vec, never a
    /// one-element vec of empty fields.
    pub fn tokenize(&self, raw: &str) -> Vec<ParamDescriptor> {
        self.pattern
            .captures_iter(raw)
            .map(|caps| {
                let name = caps.name("pname").map(|m| m.as_str()).unwrap_or_default();
                let ty = caps.name("ptype").map(|m| m.as_str()).unwrap_or_default();
                ParamDescriptor::new(name.trim(), ty.trim())
            })
            .collect()
    }
}
