//! Template-set loading
//!
//! The generator needs exactly six templates. This module loads them as a
//! set — from an external directory, from raw sources, or from the
//! defaults bundled into the binary — and exposes one typed render entry
//! point per template contract.

use std::fs;
use std::path::Path;

use crate::contexts::{
    ArgsData, ClientAggregateData, ClientMethodData, RetvalData, ServiceAggregateData,
    ServiceMethodData,
};
use crate::template::Template;
use crate::{CodegenError, Result};

/// The six template names, as used for `<name>.tmpl` asset files.
pub const TEMPLATE_NAMES: [&str; 6] =
    ["args", "retval", "service_method", "client_method", "service", "client"];

/// Raw template sources for one complete set.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSources<'a> {
    /// Source of the `args` template.
    pub args: &'a str,
    /// Source of the `retval` template.
    pub retval: &'a str,
    /// Source of the `service_method` template.
    pub service_method: &'a str,
    /// Source of the `client_method` template.
    pub client_method: &'a str,
    /// Source of the `service` aggregate template.
    pub service: &'a str,
    /// Source of the `client` aggregate template.
    pub client: &'a str,
}

impl TemplateSources<'_> {
    /// The default template set bundled with the generator. It emits Go
    /// source in the `net/rpc` style.
    pub fn bundled() -> TemplateSources<'static> {
        TemplateSources {
            args: include_str!("../templates/args.tmpl"),
            retval: include_str!("../templates/retval.tmpl"),
            service_method: include_str!("../templates/service_method.tmpl"),
            client_method: include_str!("../templates/client_method.tmpl"),
            service: include_str!("../templates/service.tmpl"),
            client: include_str!("../templates/client.tmpl"),
        }
    }
}

/// The six parsed templates the pipeline renders with.
///
/// Loaded once at startup and passed by reference into the pipeline
/// driver; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    args: Template,
    retval: Template,
    service_method: Template,
    client_method: Template,
    service: Template,
    client: Template,
}

impl TemplateSet {
    /// Parse a complete set from raw sources.
    pub fn from_sources(sources: TemplateSources<'_>) -> Result<Self> {
        Ok(Self {
            args: Template::parse("args", sources.args)?,
            retval: Template::parse("retval", sources.retval)?,
            service_method: Template::parse("service_method", sources.service_method)?,
            client_method: Template::parse("client_method", sources.client_method)?,
            service: Template::parse("service", sources.service)?,
            client: Template::parse("client", sources.client)?,
        })
    }

    /// Parse the bundled default set.
    pub fn builtin() -> Result<Self> { Self::from_sources(TemplateSources::bundled()) }

    /// Load a set from a directory containing `<name>.tmpl` for each of
    /// [`TEMPLATE_NAMES`]. A missing or invalid file is an error; there is
    /// no partial fallback to the bundled defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| -> Result<String> {
            let path = dir.join(format!("{name}.tmpl"));
            fs::read_to_string(&path).map_err(|source| CodegenError::TemplateRead {
                name: name.to_string(),
                path,
                source,
            })
        };

        let args = read("args")?;
        let retval = read("retval")?;
        let service_method = read("service_method")?;
        let client_method = read("client_method")?;
        let service = read("service")?;
        let client = read("client")?;

        Self::from_sources(TemplateSources {
            args: &args,
            retval: &retval,
            service_method: &service_method,
            client_method: &client_method,
            service: &service,
            client: &client,
        })
    }

    /// Render the argument-list fragment for one method.
    pub fn render_args(&self, data: &ArgsData<'_>) -> Result<String> {
        self.args.render(&data.context())
    }

    /// Render the return-value fragment for one method.
    pub fn render_retval(&self, data: &RetvalData<'_>) -> Result<String> {
        self.retval.render(&data.context())
    }

    /// Render one service-side dispatch method.
    pub fn render_service_method(&self, data: &ServiceMethodData<'_>) -> Result<String> {
        self.service_method.render(&data.context())
    }

    /// Render one client-side method.
    pub fn render_client_method(&self, data: &ClientMethodData<'_>) -> Result<String> {
        self.client_method.render(&data.context())
    }

    /// Render the complete service definition.
    pub fn render_service(&self, data: &ServiceAggregateData<'_>) -> Result<String> {
        self.service.render(&data.context())
    }

    /// Render the complete client definition.
    pub fn render_client(&self, data: &ClientAggregateData<'_>) -> Result<String> {
        self.client.render(&data.context())
    }
}

#[cfg(test)]
mod tests {
    use signature::ParamDescriptor;

    use super::*;

    #[test]
    fn builtin_set_parses() {
        TemplateSet::builtin().expect("bundled templates are valid");
    }

    #[test]
    fn builtin_args_template_renders_a_payload_struct() {
        let set = TemplateSet::builtin().expect("builtin");
        let out = set
            .render_args(&ArgsData {
                function_name: "Bar",
                args: &[ParamDescriptor::new("x", "int")],
            })
            .expect("renders");
        assert!(out.contains("type BarArgs struct {"), "got:\n{out}");
        assert!(out.contains("X int"), "got:\n{out}");
    }

    #[test]
    fn from_dir_loads_a_complete_set() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in TEMPLATE_NAMES {
            std::fs::write(dir.path().join(format!("{name}.tmpl")), "{{FunctionName}}")
                .expect("write");
        }
        // The aggregate templates reference FunctionName here too; this
        // is only exercising the loader, not the contracts.
        TemplateSet::from_dir(dir.path()).expect("loads");
    }

    #[test]
    fn from_dir_with_a_missing_template_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["args", "retval", "service_method", "client_method", "service"] {
            std::fs::write(dir.path().join(format!("{name}.tmpl")), "x").expect("write");
        }
        let err = TemplateSet::from_dir(dir.path()).expect_err("must fail");
        match err {
            CodegenError::TemplateRead { name, .. } => assert_eq!(name, "client"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_dir_with_an_invalid_template_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in TEMPLATE_NAMES {
            std::fs::write(dir.path().join(format!("{name}.tmpl")), "ok").expect("write");
        }
        std::fs::write(dir.path().join("retval.tmpl"), "{{#Open}}never closed").expect("write");
        let err = TemplateSet::from_dir(dir.path()).expect_err("must fail");
        match err {
            CodegenError::TemplateParse { name, .. } => assert_eq!(name, "retval"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
