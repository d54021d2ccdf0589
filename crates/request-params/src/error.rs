// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

/// Why a request could not be converted.
///
/// Every variant is terminal: the input is rejected as a whole and the first violation found is
/// the one reported.
#[derive(Debug, Error)]
pub enum RequestParamsError {
    #[error("Invalid json data: {0}")]
    InvalidJson(String),

    #[error("Not a valid GraphQL query.")]
    InvalidQueryShape,

    #[error("Not a valid object node for GraphQL variables.")]
    InvalidVariablesShape,

    #[error("{violation}")]
    InvalidFieldType {
        field: &'static str,
        violation: FieldTypeViolation,
    },

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid URL encoding in '{name}': {message}")]
    InvalidUrlEncoding { name: String, message: String },

    #[error("Cannot serialize JSON for POST body string")]
    Serialization(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldTypeViolation {
    #[error("Not a non-null value node.")]
    Null,
    #[error("Not a string value node.")]
    NotAString,
}
