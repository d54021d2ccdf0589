// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use common::env_const::get_url_argument_encoding;
use encoding_rs::{Encoding, UTF_8};
use param_env::{EnvError, Environment};

use crate::diagnostics::{DiagnosticSink, TracingDiagnostics};

/// Converts GraphQL requests to and from their HTTP wire forms.
///
/// The converter holds no per-request state; one instance can serve any number of concurrent
/// callers as long as its diagnostic sink can.
///
/// The serializing operations live in `serialize.rs` and the parsing ones in `deserialize.rs`.
#[derive(Debug, Clone)]
pub struct RequestParamConverter<D = TracingDiagnostics> {
    pub(crate) default_encoding: &'static Encoding,
    pub(crate) diagnostics: D,
}

impl RequestParamConverter {
    /// A converter that falls back to UTF-8 and logs diagnostics through `tracing`.
    pub fn new() -> Self {
        Self {
            default_encoding: UTF_8,
            diagnostics: TracingDiagnostics,
        }
    }

    /// Like [`Self::new`], with the fallback encoding taken from `GQL_URL_ARGUMENT_ENCODING`.
    pub fn from_env(env: &dyn Environment) -> Result<Self, EnvError> {
        Ok(Self::new().with_default_encoding(get_url_argument_encoding(env)?))
    }
}

impl Default for RequestParamConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DiagnosticSink> RequestParamConverter<D> {
    pub fn with_default_encoding(self, default_encoding: &'static Encoding) -> Self {
        Self {
            default_encoding,
            ..self
        }
    }

    pub fn with_diagnostics<E: DiagnosticSink>(self, diagnostics: E) -> RequestParamConverter<E> {
        RequestParamConverter {
            default_encoding: self.default_encoding,
            diagnostics,
        }
    }

    /// The encoding used when a caller passes no content encoding.
    pub fn default_encoding(&self) -> &'static Encoding {
        self.default_encoding
    }

    pub fn is_graphql_content_type(&self, content_type: Option<&str>) -> bool {
        crate::content_type::is_graphql_content_type(content_type)
    }
}
