//! Pipeline orchestration for the main generation entry point.
//!
//! The driver is a pure transformation over in-memory text: it performs
//! no filesystem or process I/O of its own. Reading the input file and
//! printing the two outputs belong to the CLI layer.

use codegen::{
    ArgsData, ClientAggregateData, ClientMethodData, RetvalData, ServiceAggregateData,
    ServiceMethodData, TemplateSet,
};
use extract::{filter_matches, normalize_returns, ParamTokenizer, SignatureMatcher};
use logging::trace;

use crate::Result;

/// One generation request: the scanned text plus the caller's naming and
/// filtering choices.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Raw input text to scan for method declarations.
    pub input: String,
    /// Receiver-name filter; empty matches every receiver name.
    pub object_name: String,
    /// Receiver-type filter; empty matches every receiver type.
    pub object_type: String,
    /// Name of the generated service type.
    pub service_name: String,
    /// Name of the generated client type.
    pub client_name: String,
}

/// The two aggregate outputs of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// The complete service-side source text.
    pub service: String,
    /// The complete client-side source text.
    pub client: String,
}

/// The generation driver.
///
/// Owns its compiled patterns and loaded templates; construct once at
/// program start and reuse. Instances are independent, so parallel tests
/// (or parallel pipelines) need no shared state.
#[derive(Debug)]
pub struct Generator {
    matcher: SignatureMatcher,
    tokenizer: ParamTokenizer,
    templates: TemplateSet,
}

impl Generator {
    /// Create a generator around a loaded template set.
    pub fn new(templates: TemplateSet) -> Result<Self> {
        Ok(Self { matcher: SignatureMatcher::new()?, tokenizer: ParamTokenizer::new()?, templates })
    }

    /// Run the full pipeline over `request.input`.
    ///
    /// For each surviving signature, in discovery order, the four
    /// per-signature fragments are rendered and accumulated in
    /// index-aligned sequences, then composed by the two aggregate
    /// templates. Failure anywhere aborts the run; no partial output is
    /// produced.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GeneratedOutput> {
        let matches = self.matcher.find_all(&request.input);
        trace("pipeline", &format!("found {} method declarations", matches.len()));

        let selected =
            filter_matches(matches, &request.object_name, &request.object_type);
        trace("pipeline", &format!("{} declarations survive the receiver filter", selected.len()));

        let mut args_fragments = Vec::with_capacity(selected.len());
        let mut retval_fragments = Vec::with_capacity(selected.len());
        let mut method_fragments = Vec::with_capacity(selected.len());
        let mut client_fragments = Vec::with_capacity(selected.len());

        for m in &selected {
            trace("pipeline", &format!("generating wrappers for {}", m.method_name));

            let args = self.tokenizer.tokenize(&m.raw_params);
            let raw_returns = self.tokenizer.tokenize(&m.raw_returns);
            let return_values = normalize_returns(&m.method_name, raw_returns)?;

            args_fragments.push(self.templates.render_args(&ArgsData {
                function_name: &m.method_name,
                args: &args,
            })?);
            retval_fragments.push(self.templates.render_retval(&RetvalData {
                function_name: &m.method_name,
                return_values: &return_values,
            })?);
            method_fragments.push(self.templates.render_service_method(&ServiceMethodData {
                service_name: &request.service_name,
                object_name: &m.receiver_name,
                object_type_name: &m.receiver_type,
                function_name: &m.method_name,
                args: &args,
                return_values: &return_values,
            })?);
            client_fragments.push(self.templates.render_client_method(&ClientMethodData {
                service_name: &request.service_name,
                object_name: &m.receiver_name,
                object_type_name: &m.receiver_type,
                client_name: &request.client_name,
                function_name: &m.method_name,
                args: &args,
                return_values: &return_values,
            })?);
        }

        // One fragment of each kind per signature, index-aligned.
        debug_assert_eq!(args_fragments.len(), retval_fragments.len());
        debug_assert_eq!(args_fragments.len(), method_fragments.len());
        debug_assert_eq!(args_fragments.len(), client_fragments.len());

        let service = self.templates.render_service(&ServiceAggregateData {
            service_name: &request.service_name,
            args_fragments: &args_fragments,
            retval_fragments: &retval_fragments,
            method_fragments: &method_fragments,
        })?;
        let client = self.templates.render_client(&ClientAggregateData {
            service_name: &request.service_name,
            client_method_fragments: &client_fragments,
        })?;

        Ok(GeneratedOutput { service, client })
    }
}
