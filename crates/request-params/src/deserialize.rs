// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde_json::{Map, Value};
use tracing::instrument;

use crate::arguments::{Argument, Arguments, EQUALS};
use crate::converter::RequestParamConverter;
use crate::diagnostics::DiagnosticSink;
use crate::encoding::{decode_body, resolve_encoding, url_decode};
use crate::error::{FieldTypeViolation, RequestParamsError};
use crate::params::{GraphQLRequestParams, OPERATION_NAME, QUERY, VARIABLES};
use crate::text::{has_operation_prefix, trim, trim_to_none};

impl<D: DiagnosticSink> RequestParamConverter<D> {
    /// Parses and validates a GraphQL POST body.
    ///
    /// `content_encoding` names the text encoding of `post_data`; when absent or empty the
    /// converter's default encoding is used. Checks run in a fixed order (JSON syntax, operation
    /// name, query, variables) and the first failure is returned.
    #[instrument(
        name = "request_params::from_post_body",
        skip(self, post_data),
        fields(len = post_data.len())
    )]
    pub fn from_post_body(
        &self,
        post_data: &[u8],
        content_encoding: Option<&str>,
    ) -> Result<GraphQLRequestParams, RequestParamsError> {
        self.parse_post_body(post_data, content_encoding)
            .inspect_err(|e| tracing::debug!("Rejected GraphQL POST body: {e}"))
    }

    /// Collects a GraphQL request from decoded HTTP arguments.
    ///
    /// Only HTTP arguments written as `name=value` with a non-blank value are considered. Values
    /// that are not flagged as always encoded are URL-decoded first. When a name appears more
    /// than once, the last occurrence wins.
    #[instrument(
        name = "request_params::from_arguments",
        skip(self, arguments),
        fields(count = arguments.len())
    )]
    pub fn from_arguments(
        &self,
        arguments: &Arguments,
        content_encoding: Option<&str>,
    ) -> Result<GraphQLRequestParams, RequestParamsError> {
        self.parse_arguments(arguments, content_encoding)
            .inspect_err(|e| tracing::debug!("Rejected GraphQL request arguments: {e}"))
    }

    fn parse_post_body(
        &self,
        post_data: &[u8],
        content_encoding: Option<&str>,
    ) -> Result<GraphQLRequestParams, RequestParamsError> {
        let encoding = resolve_encoding(content_encoding, self.default_encoding).map_err(|label| {
            RequestParamsError::InvalidJson(format!("Unsupported encoding: {label}"))
        })?;

        let mut data: Map<String, Value> = serde_json::from_str(&decode_body(post_data, encoding))
            .map_err(|e| RequestParamsError::InvalidJson(e.to_string()))?;

        let operation_name = data
            .remove(OPERATION_NAME)
            .map(|node| nullable_string(OPERATION_NAME, node))
            .transpose()?
            .flatten();

        let query = data
            .remove(QUERY)
            .ok_or(RequestParamsError::InvalidQueryShape)
            .and_then(|node| required_string(QUERY, node))?;
        if !has_operation_prefix(trim(&query)) {
            return Err(RequestParamsError::InvalidQueryShape);
        }

        let variables = match data.remove(VARIABLES) {
            None | Some(Value::Null) => None,
            Some(Value::Object(variables)) => Some(
                serde_json::to_string(&variables).map_err(RequestParamsError::Serialization)?,
            ),
            Some(_) => return Err(RequestParamsError::InvalidVariablesShape),
        };

        Ok(GraphQLRequestParams::new(operation_name, query, variables))
    }

    fn parse_arguments(
        &self,
        arguments: &Arguments,
        content_encoding: Option<&str>,
    ) -> Result<GraphQLRequestParams, RequestParamsError> {
        let collected = arguments
            .iter()
            .try_fold(CollectedArguments::default(), |collected, argument| {
                self.collect_argument(collected, argument, content_encoding)
            })?;

        let query = collected
            .query
            .filter(|query| has_operation_prefix(query))
            .ok_or(RequestParamsError::InvalidQueryShape)?;

        if let Some(variables) = &collected.variables {
            if !variables.is_empty() && !(variables.starts_with('{') && variables.ends_with('}')) {
                return Err(RequestParamsError::InvalidVariablesShape);
            }
        }

        Ok(GraphQLRequestParams::new(
            collected.operation_name,
            query,
            collected.variables,
        ))
    }

    fn collect_argument(
        &self,
        collected: CollectedArguments,
        argument: &Argument,
        content_encoding: Option<&str>,
    ) -> Result<CollectedArguments, RequestParamsError> {
        if !argument.is_http() || argument.metadata != EQUALS {
            return Ok(collected);
        }
        let Some(value) = trim_to_none(&argument.value) else {
            return Ok(collected);
        };
        if !CollectedArguments::accepts(&argument.name) {
            return Ok(collected);
        }

        let value = if argument.is_always_encoded() {
            value.to_string()
        } else {
            let encoding = resolve_encoding(content_encoding, self.default_encoding)
                .map_err(|label| RequestParamsError::UnsupportedEncoding(label.to_string()))?;
            url_decode(value, encoding).map_err(|e| RequestParamsError::InvalidUrlEncoding {
                name: argument.name.clone(),
                message: e.to_string(),
            })?
        };

        Ok(collected.assign(&argument.name, value))
    }
}

/// The request fields seen so far while scanning arguments in order.
#[derive(Debug, Default)]
struct CollectedArguments {
    operation_name: Option<String>,
    query: Option<String>,
    variables: Option<String>,
}

impl CollectedArguments {
    fn accepts(name: &str) -> bool {
        matches!(name, OPERATION_NAME | QUERY | VARIABLES)
    }

    fn assign(self, name: &str, value: String) -> Self {
        match name {
            OPERATION_NAME => Self {
                operation_name: Some(value),
                ..self
            },
            QUERY => Self {
                query: Some(value),
                ..self
            },
            VARIABLES => Self {
                variables: Some(value),
                ..self
            },
            _ => self,
        }
    }
}

fn nullable_string(field: &'static str, node: Value) -> Result<Option<String>, RequestParamsError> {
    match node {
        Value::Null => Ok(None),
        node => required_string(field, node).map(Some),
    }
}

fn required_string(field: &'static str, node: Value) -> Result<String, RequestParamsError> {
    match node {
        Value::String(text) => Ok(text),
        Value::Null => Err(RequestParamsError::InvalidFieldType {
            field,
            violation: FieldTypeViolation::Null,
        }),
        _ => Err(RequestParamsError::InvalidFieldType {
            field,
            violation: FieldTypeViolation::NotAString,
        }),
    }
}
