// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Conversion between GraphQL requests and their HTTP wire forms.
//!
//! A request is the triple of operation name, query and variables ([`GraphQLRequestParams`]).
//! Over HTTP it travels either as a JSON POST body or as URL query/form arguments.
//! [`RequestParamConverter`] translates in both directions:
//!
//! - Parsing wire data validates it and fails with a [`RequestParamsError`] describing the first
//!   problem found.
//! - Serializing trusts its input. Malformed variables are dropped and reported to a
//!   [`DiagnosticSink`] instead of failing the whole request.

mod arguments;
mod content_type;
mod converter;
mod deserialize;
mod diagnostics;
mod encoding;
mod error;
mod params;
mod serialize;
mod text;

pub use arguments::{Argument, ArgumentKind, Arguments, EQUALS};
pub use content_type::is_graphql_content_type;
pub use converter::RequestParamConverter;
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics, VariablesTarget};
pub use error::{FieldTypeViolation, RequestParamsError};
pub use params::{GraphQLRequestParams, OPERATION_NAME, QUERY, VARIABLES};
pub use serialize::query_to_get_param_value;
