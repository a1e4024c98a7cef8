//! Minimal template language
//!
//! Templates are plain text with `{{...}}` tags:
//!
//! - `{{Field}}` substitutes a text binding from the render context.
//! - `{{#Seq}}body{{/Seq}}` renders `body` once per element of a sequence
//!   binding. `{{#Seq|sep}}` joins the per-element renders with the
//!   literal separator `sep`.
//! - Inside a parameter section the element scope binds `{{Name}}`,
//!   `{{Type}}`, `{{CapName}}`, `{{FormatId}}`, and `{{Index}}`; inside a
//!   fragment section it binds `{{.}}`. Names that do not resolve in the
//!   element scope fall back to the enclosing context.
//!
//! Parse failures (unclosed or mismatched sections, malformed tags) are
//! fatal at load time. Render failures mean the context does not satisfy
//! the template's placeholders and are reported as
//! [`CodegenError::TemplateMismatch`].

use std::collections::BTreeMap;

use regex::Regex;
use signature::ParamDescriptor;

use crate::{CodegenError, Result};

/// The tag pattern. Tags never span lines and never nest braces.
const TAG_PATTERN: &str = r"\{\{([^{}\n]*?)\}\}";

/// One parsed node of a template body.
#[derive(Debug, Clone)]
enum Node {
    /// Literal text, emitted verbatim.
    Literal(String),
    /// `{{Field}}` or the implicit `{{.}}` element reference.
    Placeholder(String),
    /// `{{#Seq|sep}}body{{/Seq}}`.
    Section { name: String, separator: String, body: Vec<Node> },
}

/// A parsed, render-ready template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    nodes: Vec<Node>,
}

/// A value bound to a placeholder or section name.
#[derive(Debug, Clone)]
pub enum Value {
    /// A plain text substitution.
    Text(String),
    /// An ordered parameter/return-value list.
    Params(Vec<ParamDescriptor>),
    /// An ordered list of previously rendered fragments.
    Fragments(Vec<String>),
}

/// A flat set of bindings for one render call.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    fields: BTreeMap<String, Value>,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self { Self::default() }

    /// Bind a text value.
    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), Value::Text(value.into()));
        self
    }

    /// Bind a parameter sequence.
    pub fn with_params(mut self, name: &str, params: &[ParamDescriptor]) -> Self {
        self.fields.insert(name.to_string(), Value::Params(params.to_vec()));
        self
    }

    /// Bind a fragment sequence.
    pub fn with_fragments(mut self, name: &str, fragments: &[String]) -> Self {
        self.fields.insert(name.to_string(), Value::Fragments(fragments.to_vec()));
        self
    }

    fn get(&self, name: &str) -> Option<&Value> { self.fields.get(name) }
}

/// The element currently in scope while rendering a section body.
enum ElementScope<'a> {
    Param { pd: &'a ParamDescriptor, index: usize },
    Fragment(&'a str),
}

impl Template {
    /// Parse `source` into a template. `name` is used in diagnostics only.
    pub fn parse(name: &str, source: &str) -> Result<Self> {
        let tag = Regex::new(TAG_PATTERN)?;

        // Stack of open sections: (name, separator, nodes before the open tag).
        let mut stack: Vec<(String, String, Vec<Node>)> = Vec::new();
        let mut current: Vec<Node> = Vec::new();
        let mut cursor = 0;

        for caps in tag.captures_iter(source) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            if whole.start() > cursor {
                current.push(Node::Literal(source[cursor..whole.start()].to_string()));
            }
            cursor = whole.end();

            let content = &caps[1];
            if let Some(rest) = content.strip_prefix('#') {
                let (section, separator) = match rest.split_once('|') {
                    Some((section, separator)) => (section, separator),
                    None => (rest, ""),
                };
                validate_name(name, section)?;
                stack.push((
                    section.to_string(),
                    separator.to_string(),
                    std::mem::take(&mut current),
                ));
            } else if let Some(rest) = content.strip_prefix('/') {
                let (open_name, separator, parent) = stack.pop().ok_or_else(|| {
                    CodegenError::TemplateParse {
                        name: name.to_string(),
                        reason: format!("close tag '{{{{/{rest}}}}}' without an open section"),
                    }
                })?;
                if open_name != rest {
                    return Err(CodegenError::TemplateParse {
                        name: name.to_string(),
                        reason: format!("section '{open_name}' closed as '{rest}'"),
                    });
                }
                let body = std::mem::replace(&mut current, parent);
                current.push(Node::Section { name: open_name, separator, body });
            } else if content == "." {
                current.push(Node::Placeholder(".".to_string()));
            } else {
                validate_name(name, content)?;
                current.push(Node::Placeholder(content.to_string()));
            }
        }

        if let Some((open_name, _, _)) = stack.last() {
            return Err(CodegenError::TemplateParse {
                name: name.to_string(),
                reason: format!("section '{open_name}' is never closed"),
            });
        }
        if cursor < source.len() {
            current.push(Node::Literal(source[cursor..].to_string()));
        }

        Ok(Self { name: name.to_string(), nodes: current })
    }

    /// Template name, as used in diagnostics.
    pub fn name(&self) -> &str { &self.name }

    /// Render the template against `ctx`.
    pub fn render(&self, ctx: &RenderContext) -> Result<String> {
        self.render_nodes(&self.nodes, ctx, None)
    }

    fn render_nodes(
        &self,
        nodes: &[Node],
        ctx: &RenderContext,
        element: Option<&ElementScope<'_>>,
    ) -> Result<String> {
        let mut out = String::new();
        for node in nodes {
            match node {
                Node::Literal(text) => out.push_str(text),
                Node::Placeholder(key) => out.push_str(&self.resolve(key, ctx, element)?),
                Node::Section { name, separator, body } => {
                    let rendered: Vec<String> = match ctx.get(name) {
                        Some(Value::Params(params)) => params
                            .iter()
                            .enumerate()
                            .map(|(index, pd)| {
                                self.render_nodes(
                                    body,
                                    ctx,
                                    Some(&ElementScope::Param { pd, index }),
                                )
                            })
                            .collect::<Result<_>>()?,
                        Some(Value::Fragments(fragments)) => fragments
                            .iter()
                            .map(|f| {
                                self.render_nodes(body, ctx, Some(&ElementScope::Fragment(f)))
                            })
                            .collect::<Result<_>>()?,
                        Some(Value::Text(_)) => {
                            return Err(self.mismatch(format!(
                                "section '{name}' is bound to a text value, not a sequence"
                            )));
                        }
                        None => {
                            return Err(self.mismatch(format!("no binding for section '{name}'")));
                        }
                    };
                    out.push_str(&rendered.join(separator.as_str()));
                }
            }
        }
        Ok(out)
    }

    fn resolve(
        &self,
        key: &str,
        ctx: &RenderContext,
        element: Option<&ElementScope<'_>>,
    ) -> Result<String> {
        if let Some(scope) = element {
            match scope {
                ElementScope::Param { pd, index } => match key {
                    "Name" => return Ok(pd.name.clone()),
                    "Type" => return Ok(pd.param_type.clone()),
                    "CapName" => return Ok(pd.capitalized_name()),
                    "FormatId" => return Ok(pd.format_id().to_string()),
                    "Index" => return Ok(index.to_string()),
                    _ => {}
                },
                ElementScope::Fragment(text) => {
                    if key == "." {
                        return Ok((*text).to_string());
                    }
                }
            }
        }
        if key == "." {
            return Err(self.mismatch("'{{.}}' used outside a fragment section".to_string()));
        }
        match ctx.get(key) {
            Some(Value::Text(text)) => Ok(text.clone()),
            Some(_) => {
                Err(self.mismatch(format!("placeholder '{key}' is bound to a sequence, not text")))
            }
            None => Err(self.mismatch(format!("no binding for placeholder '{key}'"))),
        }
    }

    fn mismatch(&self, reason: String) -> CodegenError {
        CodegenError::TemplateMismatch(format!("template '{}': {}", self.name, reason))
    }
}

fn validate_name(template: &str, candidate: &str) -> Result<()> {
    let mut chars = candidate.chars();
    let head_ok = chars.next().map(|c| c.is_ascii_alphabetic() || c == '_').unwrap_or(false);
    if head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(CodegenError::TemplateParse {
            name: template.to_string(),
            reason: format!("invalid tag name '{candidate}'"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, ty: &str) -> ParamDescriptor { ParamDescriptor::new(name, ty) }

    #[test]
    fn renders_text_placeholders() {
        let t = Template::parse("t", "hello {{Who}}!").expect("parses");
        let out = t.render(&RenderContext::new().with_text("Who", "world")).expect("renders");
        assert_eq!(out, "hello world!");
    }

    #[test]
    fn renders_param_sections_with_separator() {
        let t = Template::parse("t", "({{#Args|, }}{{Name}} {{Type}}{{/Args}})").expect("parses");
        let ctx = RenderContext::new()
            .with_params("Args", &[param("a", "int"), param("b", "string")]);
        assert_eq!(t.render(&ctx).expect("renders"), "(a int, b string)");
    }

    #[test]
    fn empty_sequence_renders_section_to_nothing() {
        let t = Template::parse("t", "({{#Args|, }}{{Name}}{{/Args}})").expect("parses");
        let ctx = RenderContext::new().with_params("Args", &[]);
        assert_eq!(t.render(&ctx).expect("renders"), "()");
    }

    #[test]
    fn element_scope_exposes_derived_projections() {
        let t = Template::parse("t", "{{#Args|;}}{{Index}}:{{CapName}}:{{FormatId}}{{/Args}}")
            .expect("parses");
        let ctx =
            RenderContext::new().with_params("Args", &[param("addr", "string"), param("n", "int64")]);
        assert_eq!(t.render(&ctx).expect("renders"), "0:Addr:%s;1:N:%d");
    }

    #[test]
    fn fragment_sections_bind_the_implicit_element() {
        let t = Template::parse("t", "{{#Funcs}}{{.}}{{/Funcs}}").expect("parses");
        let ctx = RenderContext::new()
            .with_fragments("Funcs", &["one\n".to_string(), "two\n".to_string()]);
        assert_eq!(t.render(&ctx).expect("renders"), "one\ntwo\n");
    }

    #[test]
    fn section_body_falls_back_to_enclosing_context() {
        let t = Template::parse("t", "{{#Args}}{{Fn}}.{{Name}} {{/Args}}").expect("parses");
        let ctx = RenderContext::new()
            .with_text("Fn", "Bar")
            .with_params("Args", &[param("a", "int"), param("b", "int")]);
        assert_eq!(t.render(&ctx).expect("renders"), "Bar.a Bar.b ");
    }

    #[test]
    fn adjacent_braces_around_tags_stay_literal() {
        let t = Template::parse("t", "Args{{{#Args|, }}{{CapName}}: {{Name}}{{/Args}}}")
            .expect("parses");
        let ctx = RenderContext::new().with_params("Args", &[param("x", "int")]);
        assert_eq!(t.render(&ctx).expect("renders"), "Args{X: x}");
    }

    #[test]
    fn unclosed_section_is_a_parse_error() {
        let err = Template::parse("t", "{{#Args}}{{Name}}").expect_err("must fail");
        assert!(matches!(err, CodegenError::TemplateParse { .. }), "got {err:?}");
    }

    #[test]
    fn mismatched_close_is_a_parse_error() {
        let err = Template::parse("t", "{{#Args}}{{Name}}{{/Rets}}").expect_err("must fail");
        assert!(matches!(err, CodegenError::TemplateParse { .. }), "got {err:?}");
    }

    #[test]
    fn stray_close_is_a_parse_error() {
        let err = Template::parse("t", "{{/Args}}").expect_err("must fail");
        assert!(matches!(err, CodegenError::TemplateParse { .. }), "got {err:?}");
    }

    #[test]
    fn missing_placeholder_binding_is_a_mismatch() {
        let t = Template::parse("t", "{{Missing}}").expect("parses");
        let err = t.render(&RenderContext::new()).expect_err("must fail");
        let msg = err.to_string();
        assert!(msg.starts_with("Template is not consistent with data:"), "got: {msg}");
    }

    #[test]
    fn section_over_text_binding_is_a_mismatch() {
        let t = Template::parse("t", "{{#Name}}{{.}}{{/Name}}").expect("parses");
        let ctx = RenderContext::new().with_text("Name", "x");
        let err = t.render(&ctx).expect_err("must fail");
        assert!(matches!(err, CodegenError::TemplateMismatch(_)), "got {err:?}");
    }

    #[test]
    fn placeholder_over_sequence_binding_is_a_mismatch() {
        let t = Template::parse("t", "{{Args}}").expect("parses");
        let ctx = RenderContext::new().with_params("Args", &[param("a", "int")]);
        let err = t.render(&ctx).expect_err("must fail");
        assert!(matches!(err, CodegenError::TemplateMismatch(_)), "got {err:?}");
    }
}
