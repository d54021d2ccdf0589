// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::arguments::{Argument, Arguments};
use crate::converter::RequestParamConverter;
use crate::diagnostics::{Diagnostic, DiagnosticSink, VariablesTarget};
use crate::error::RequestParamsError;
use crate::params::{GraphQLRequestParams, OPERATION_NAME, QUERY, VARIABLES};
use crate::text::{collapse_whitespace, is_blank, trim, trim_to_none};

// Field order is the wire order.
#[derive(Serialize)]
struct PostBody<'a> {
    #[serde(rename = "operationName")]
    operation_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Map<String, Value>>,
    query: &'a str,
}

/// Trims the query and collapses every whitespace run (including line breaks) into one space,
/// so that the query fits on a single URL parameter line.
pub fn query_to_get_param_value(query: &str) -> String {
    collapse_whitespace(trim(query))
}

impl<D: DiagnosticSink> RequestParamConverter<D> {
    /// Builds the JSON body of a GraphQL POST request.
    ///
    /// Variables are embedded as a nested object. If they do not parse as a JSON object they are
    /// left out and a [`Diagnostic::VariablesDropped`] is reported.
    #[instrument(name = "request_params::to_post_body_string", skip_all)]
    pub fn to_post_body_string(
        &self,
        params: &GraphQLRequestParams,
    ) -> Result<String, RequestParamsError> {
        let variables = params
            .variables()
            .filter(|variables| !is_blank(variables))
            .and_then(|variables| self.parse_variables(variables, VariablesTarget::PostBody));

        let body = PostBody {
            operation_name: params.operation_name().and_then(trim_to_none),
            variables,
            query: trim(params.query()),
        };

        serde_json::to_string(&body).map_err(RequestParamsError::Serialization)
    }

    pub fn query_to_get_param_value(&self, query: &str) -> String {
        query_to_get_param_value(query)
    }

    /// Re-serializes variables as compact JSON. `None` (with a reported diagnostic) if they are
    /// not a JSON object; the caller should then leave the parameter out.
    pub fn variables_to_get_param_value(&self, variables: &str) -> Option<String> {
        let variables = self.parse_variables(variables, VariablesTarget::GetParam)?;

        match serde_json::to_string(&variables) {
            Ok(serialized) => Some(serialized),
            Err(e) => {
                self.report_dropped_variables(VariablesTarget::GetParam, &e);
                None
            }
        }
    }

    /// The GET counterpart of [`Self::to_post_body_string`]: one always-encoded HTTP argument per
    /// field present, in the order operation name, query, variables.
    #[instrument(name = "request_params::to_get_arguments", skip_all)]
    pub fn to_get_arguments(&self, params: &GraphQLRequestParams) -> Arguments {
        let mut arguments = Arguments::new();

        if let Some(operation_name) = params.operation_name().and_then(trim_to_none) {
            arguments.push(Argument::http(OPERATION_NAME, operation_name, true));
        }

        arguments.push(Argument::http(
            QUERY,
            query_to_get_param_value(params.query()),
            true,
        ));

        if let Some(variables) = params
            .variables()
            .filter(|variables| !is_blank(variables))
            .and_then(|variables| self.variables_to_get_param_value(variables))
        {
            arguments.push(Argument::http(VARIABLES, variables, true));
        }

        arguments
    }

    fn parse_variables(
        &self,
        variables: &str,
        target: VariablesTarget,
    ) -> Option<Map<String, Value>> {
        serde_json::from_str(variables)
            .map_err(|e| self.report_dropped_variables(target, &e))
            .ok()
    }

    fn report_dropped_variables(&self, target: VariablesTarget, error: &serde_json::Error) {
        self.diagnostics.report(Diagnostic::VariablesDropped {
            target,
            reason: error.to_string(),
        });
    }
}
