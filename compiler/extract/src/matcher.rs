//! Method-signature matching
//!
//! Finds method-like declarations in raw input text with a single compiled
//! pattern. This is deliberately a lightweight scanner, not a language
//! parser: anything the pattern does not recognize is ignored.

use regex::Regex;
use signature::SignatureMatch;

use crate::Result;

/// The pattern used to find method declarations.
///
/// Lazy quantifiers matter here: the parameter and return captures must
/// stop at the nearest closing delimiter so that nested braces or brackets
/// in type expressions stay inside the captured text.
const METHOD_PATTERN: &str = r"\s*?func\s*?\(\s*?(?P<rname>\w+?)\s+?\*?(?P<rtype>[\w]+?)\s*?\)\s+(?P<fname>\w+)\s*?\(\s*?(?P<fparams>[\s\S]*?)\)\s*?\(?\s*?(?P<freturn>[\s\S]*?)\)?\s*?\{";

/// Scans input text for method declarations.
///
/// Holds its compiled pattern; construct once and reuse across inputs.
#[derive(Debug)]
pub struct SignatureMatcher {
    pattern: Regex,
}

impl SignatureMatcher {
    /// Compile the method pattern.
    pub fn new() -> Result<Self> { Ok(Self { pattern: Regex::new(METHOD_PATTERN)? }) }

    /// Find every method declaration in `text`.
    ///
    /// Matches are non-overlapping and returned in the order of their first
    /// matched character. Input with no declarations yields an empty vec,
    /// not an error.
    pub fn find_all(&self, text: &str) -> Vec<SignatureMatch> {
        self.pattern
            .captures_iter(text)
            .map(|caps| {
                let group = |name: &str| {
                    caps.name(name).map(|m| m.as_str()).unwrap_or_default().to_string()
                };
                SignatureMatch {
                    receiver_name: group("rname"),
                    receiver_type: group("rtype"),
                    method_name: group("fname"),
                    raw_params: group("fparams"),
                    raw_returns: tidy_returns(&group("freturn")),
                }
            })
            .collect()
    }
}

/// The return capture keeps whatever the optional result parens did not
/// consume, so a parenthesized result list arrives as ` (a, b`. Strip the
/// stray opening delimiter so the stored text is the content between the
/// parentheses.
fn tidy_returns(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('(').unwrap_or(trimmed);
    trimmed.trim_start().to_string()
}
