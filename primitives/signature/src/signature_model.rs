//! wrapgen signature representation
//!
//! This module defines the structures produced by signature extraction and
//! consumed by template rendering. A `SignatureMatch` is one textual method
//! declaration; a `ParamDescriptor` is one entry of its parameter list or
//! return-value list.

use serde::{Deserialize, Serialize};

/// One method declaration found in the scanned input text.
///
/// The parameter and return-value fields hold the raw text between the
/// declaration's parentheses; tokenization into `ParamDescriptor`s happens
/// in a later stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureMatch {
    /// Receiver variable name (e.g., `s` in `func (s *Foo) Bar(...)`).
    pub receiver_name: String,
    /// Receiver type name without the pointer marker (e.g., `Foo`).
    pub receiver_type: String,
    /// Method name (e.g., `Bar`).
    pub method_name: String,
    /// Raw parameter-list text, possibly empty.
    pub raw_params: String,
    /// Raw return-value text, possibly empty.
    pub raw_returns: String,
}

/// A parameter or return value in its simplest form: a name (possibly
/// empty) and an opaque type token. No semantic type resolution is
/// performed anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Declared name; empty when the declaration leaves the slot unnamed.
    pub name: String,
    /// Type token, carried verbatim from the input.
    pub param_type: String,
}

impl ParamDescriptor {
    /// Create a descriptor from pre-trimmed name and type fields.
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self { name: name.into(), param_type: param_type.into() }
    }

    /// The name with its first character uppercased (e.g., for exported
    /// struct fields in generated code). Empty names stay empty.
    pub fn capitalized_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        }
    }

    /// Classify the type token for logging/format-string synthesis.
    pub fn format_class(&self) -> FormatClass {
        match self.param_type.as_str() {
            "int" | "uint" | "int32" | "uint32" | "int64" | "uint64" | "int8" | "uint8" => {
                FormatClass::Numeric
            }
            "float32" | "float64" => FormatClass::Float,
            "string" => FormatClass::Text,
            _ => FormatClass::Opaque,
        }
    }

    /// The format placeholder for this descriptor's type, as used by
    /// templates that synthesize logging statements.
    pub fn format_id(&self) -> &'static str { self.format_class().format_id() }
}

/// Format-placeholder classification for a type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatClass {
    /// Integer types of any width or signedness.
    Numeric,
    /// Floating-point types.
    Float,
    /// The string type.
    Text,
    /// Anything else: structs, pointers, slices, interfaces.
    Opaque,
}

impl FormatClass {
    /// The format placeholder the generated logging code should use.
    pub fn format_id(&self) -> &'static str {
        match self {
            FormatClass::Numeric => "%d",
            FormatClass::Float => "%f",
            FormatClass::Text => "%s",
            FormatClass::Opaque => "%#v",
        }
    }
}

/// An ordered set of extracted signatures, serializable as JSON so the CLI
/// can dump extraction results for inspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignatureSet {
    /// Extracted signatures in input discovery order.
    signatures: Vec<SignatureMatch>,
}

impl SignatureSet {
    /// Create a signature set from extracted matches.
    pub fn new(signatures: Vec<SignatureMatch>) -> Self { Self { signatures } }

    /// All signatures in discovery order.
    pub fn signatures(&self) -> &[SignatureMatch] { &self.signatures }

    /// Number of signatures in the set.
    pub fn len(&self) -> usize { self.signatures.len() }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool { self.signatures.is_empty() }

    /// Load a signature set from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set: Self = serde_json::from_str(&content)?;
        Ok(set)
    }

    /// Save the signature set to a JSON file with pretty formatting.
    pub fn to_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        // Ensure file ends with a newline (POSIX standard)
        use std::io::Write;
        writeln!(file)?;
        Ok(())
    }

    /// Render the set as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalized_name_uppercases_first_char() {
        let pd = ParamDescriptor::new("addr", "string");
        assert_eq!(pd.capitalized_name(), "Addr");
    }

    #[test]
    fn capitalized_name_of_empty_name_is_empty() {
        let pd = ParamDescriptor::new("", "int");
        assert_eq!(pd.capitalized_name(), "");
    }

    #[test]
    fn format_class_covers_the_builtin_types() {
        assert_eq!(ParamDescriptor::new("n", "int64").format_id(), "%d");
        assert_eq!(ParamDescriptor::new("n", "uint8").format_id(), "%d");
        assert_eq!(ParamDescriptor::new("x", "float64").format_id(), "%f");
        assert_eq!(ParamDescriptor::new("s", "string").format_id(), "%s");
        assert_eq!(ParamDescriptor::new("m", "MyStruct").format_id(), "%#v");
        assert_eq!(ParamDescriptor::new("p", "*Foo").format_id(), "%#v");
    }

    #[test]
    fn signature_set_round_trips_through_a_file() {
        let set = SignatureSet::new(vec![SignatureMatch {
            receiver_name: "s".to_string(),
            receiver_type: "Foo".to_string(),
            method_name: "Bar".to_string(),
            raw_params: "x int".to_string(),
            raw_returns: "int, error".to_string(),
        }]);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("signatures.json");
        set.to_file(&path).expect("write");

        let loaded = SignatureSet::from_file(&path).expect("read");
        assert_eq!(loaded.signatures(), set.signatures());
    }
}
