//! Render-context contracts for the six templates
//!
//! Each template has an exact contract: the set of placeholder names its
//! render context must supply. These types make the contracts explicit —
//! one struct per template, with a `context()` method that produces the
//! bindings the template engine consumes.

use signature::ParamDescriptor;

use crate::template::RenderContext;

/// Context for the `args` template: the argument-list representation of
/// one method.
#[derive(Debug)]
pub struct ArgsData<'a> {
    /// Method name.
    pub function_name: &'a str,
    /// Tokenized parameters, in declaration order.
    pub args: &'a [ParamDescriptor],
}

impl ArgsData<'_> {
    /// Bindings: `FunctionName`, `Args`.
    pub fn context(&self) -> RenderContext {
        RenderContext::new()
            .with_text("FunctionName", self.function_name)
            .with_params("Args", self.args)
    }
}

/// Context for the `retval` template: the return-value representation of
/// one method.
#[derive(Debug)]
pub struct RetvalData<'a> {
    /// Method name.
    pub function_name: &'a str,
    /// Normalized return values (error slot dropped, names populated).
    pub return_values: &'a [ParamDescriptor],
}

impl RetvalData<'_> {
    /// Bindings: `FunctionName`, `ReturnValues`.
    pub fn context(&self) -> RenderContext {
        RenderContext::new()
            .with_text("FunctionName", self.function_name)
            .with_params("ReturnValues", self.return_values)
    }
}

/// Context for the `service_method` template: one full service-side
/// dispatch method.
#[derive(Debug)]
pub struct ServiceMethodData<'a> {
    /// Service type name.
    pub service_name: &'a str,
    /// Receiver variable name of the wrapped object.
    pub object_name: &'a str,
    /// Receiver type name of the wrapped object.
    pub object_type_name: &'a str,
    /// Method name.
    pub function_name: &'a str,
    /// Tokenized parameters.
    pub args: &'a [ParamDescriptor],
    /// Normalized return values.
    pub return_values: &'a [ParamDescriptor],
}

impl ServiceMethodData<'_> {
    /// Bindings: `ServiceName`, `ObjectName`, `ObjectTypeName`,
    /// `FunctionName`, `Args`, `ReturnValues`.
    pub fn context(&self) -> RenderContext {
        RenderContext::new()
            .with_text("ServiceName", self.service_name)
            .with_text("ObjectName", self.object_name)
            .with_text("ObjectTypeName", self.object_type_name)
            .with_text("FunctionName", self.function_name)
            .with_params("Args", self.args)
            .with_params("ReturnValues", self.return_values)
    }
}

/// Context for the `client_method` template: one full client-side method.
#[derive(Debug)]
pub struct ClientMethodData<'a> {
    /// Service type name.
    pub service_name: &'a str,
    /// Receiver variable name of the wrapped object.
    pub object_name: &'a str,
    /// Receiver type name of the wrapped object.
    pub object_type_name: &'a str,
    /// Client type name.
    pub client_name: &'a str,
    /// Method name.
    pub function_name: &'a str,
    /// Tokenized parameters.
    pub args: &'a [ParamDescriptor],
    /// Normalized return values.
    pub return_values: &'a [ParamDescriptor],
}

impl ClientMethodData<'_> {
    /// Bindings: `ServiceName`, `ObjectName`, `ObjectTypeName`,
    /// `ClientName`, `FunctionName`, `Args`, `ReturnValues`.
    pub fn context(&self) -> RenderContext {
        RenderContext::new()
            .with_text("ServiceName", self.service_name)
            .with_text("ObjectName", self.object_name)
            .with_text("ObjectTypeName", self.object_type_name)
            .with_text("ClientName", self.client_name)
            .with_text("FunctionName", self.function_name)
            .with_params("Args", self.args)
            .with_params("ReturnValues", self.return_values)
    }
}

/// Context for the `service` aggregate template: the complete service
/// definition composed from per-method fragments.
#[derive(Debug)]
pub struct ServiceAggregateData<'a> {
    /// Service type name.
    pub service_name: &'a str,
    /// Rendered `args` fragments, one per signature, in discovery order.
    pub args_fragments: &'a [String],
    /// Rendered `retval` fragments, index-aligned with `args_fragments`.
    pub retval_fragments: &'a [String],
    /// Rendered `service_method` fragments, index-aligned.
    pub method_fragments: &'a [String],
}

impl ServiceAggregateData<'_> {
    /// Bindings: `ServiceName`, `ArgsFragments`, `RetvalFragments`,
    /// `MethodFragments`.
    pub fn context(&self) -> RenderContext {
        RenderContext::new()
            .with_text("ServiceName", self.service_name)
            .with_fragments("ArgsFragments", self.args_fragments)
            .with_fragments("RetvalFragments", self.retval_fragments)
            .with_fragments("MethodFragments", self.method_fragments)
    }
}

/// Context for the `client` aggregate template: the complete client
/// definition composed from per-method fragments.
#[derive(Debug)]
pub struct ClientAggregateData<'a> {
    /// Service type name.
    pub service_name: &'a str,
    /// Rendered `client_method` fragments, in discovery order.
    pub client_method_fragments: &'a [String],
}

impl ClientAggregateData<'_> {
    /// Bindings: `ServiceName`, `ClientMethodFragments`.
    pub fn context(&self) -> RenderContext {
        RenderContext::new()
            .with_text("ServiceName", self.service_name)
            .with_fragments("ClientMethodFragments", self.client_method_fragments)
    }
}
