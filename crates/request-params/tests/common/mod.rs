use std::sync::{Arc, Mutex};

use request_params::{Diagnostic, DiagnosticSink, GraphQLRequestParams, RequestParamConverter};
use serde_json::Value;

/// A converter whose diagnostics are collected instead of logged.
pub fn converter() -> (
    RequestParamConverter<impl DiagnosticSink>,
    Arc<Mutex<Vec<Diagnostic>>>,
) {
    let diagnostics = Arc::new(Mutex::new(vec![]));
    let sink = {
        let diagnostics = diagnostics.clone();
        move |diagnostic: Diagnostic| diagnostics.lock().unwrap().push(diagnostic)
    };
    (RequestParamConverter::new().with_diagnostics(sink), diagnostics)
}

pub fn params(
    operation_name: Option<&str>,
    query: &str,
    variables: Option<&str>,
) -> GraphQLRequestParams {
    GraphQLRequestParams::new(
        operation_name.map(String::from),
        query,
        variables.map(String::from),
    )
}

pub fn json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}
