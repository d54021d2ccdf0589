// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const OPERATION_NAME: &str = "operationName";
pub const QUERY: &str = "query";
pub const VARIABLES: &str = "variables";

/// A GraphQL request independent of how it travels over HTTP.
///
/// Values are stored as received. Validation happens where wire data is parsed (see
/// [`crate::RequestParamConverter`]), so holding one of these does not by itself mean the query
/// passed the prefix check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequestParams {
    operation_name: Option<String>,
    query: String,
    variables: Option<String>,
}

impl GraphQLRequestParams {
    pub fn new(
        operation_name: Option<String>,
        query: impl Into<String>,
        variables: Option<String>,
    ) -> Self {
        Self {
            operation_name,
            query: query.into(),
            variables,
        }
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Variables as serialized JSON text.
    pub fn variables(&self) -> Option<&str> {
        self.variables.as_deref()
    }

    /// A blank operation name counts as no operation name.
    pub fn has_operation_name(&self) -> bool {
        self.operation_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    pub fn has_variables(&self) -> bool {
        self.variables
            .as_deref()
            .is_some_and(|variables| !variables.trim().is_empty())
    }

    /// Parses the stored variables. `None` if there are none, `Some(Err(_))` if they are not a
    /// JSON object.
    pub fn variables_json(&self) -> Option<Result<Map<String, Value>, serde_json::Error>> {
        self.variables
            .as_deref()
            .filter(|variables| !variables.trim().is_empty())
            .map(serde_json::from_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiplatform_test::multiplatform_test;
    use serde_json::json;

    #[multiplatform_test]
    fn blank_fields_count_as_absent() {
        let params =
            GraphQLRequestParams::new(Some("  ".into()), "query { a }", Some("\n".into()));

        assert!(!params.has_operation_name());
        assert!(!params.has_variables());
        assert!(params.variables_json().is_none());
    }

    #[multiplatform_test]
    fn variables_json_parses_objects_only() {
        let params = GraphQLRequestParams::new(None, "query { a }", Some(r#"{"x":1}"#.into()));
        let variables = params.variables_json().unwrap().unwrap();
        assert_eq!(Value::Object(variables), json!({"x": 1}));

        let params = GraphQLRequestParams::new(None, "query { a }", Some("[1]".into()));
        assert!(params.variables_json().unwrap().is_err());
    }

    #[multiplatform_test]
    fn serializes_with_camel_case_names() {
        let params = GraphQLRequestParams::new(
            Some("Ping".into()),
            "query Ping { ping }",
            Some(r#"{"x":1}"#.into()),
        );

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "operationName": "Ping",
                "query": "query Ping { ping }",
                "variables": "{\"x\":1}"
            })
        );
    }
}
