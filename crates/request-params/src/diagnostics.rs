// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Problems that serialization recovers from instead of failing.
//!
//! Serialization works on data the caller already trusts, so malformed variables are dropped
//! rather than rejected. Each drop is reported to a [`DiagnosticSink`] so that the caller still
//! finds out.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariablesTarget {
    PostBody,
    GetParam,
}

impl fmt::Display for VariablesTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariablesTarget::PostBody => write!(f, "POST body"),
            VariablesTarget::GetParam => write!(f, "GET parameter"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    VariablesDropped {
        target: VariablesTarget,
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::VariablesDropped { reason, .. } => write!(
                f,
                "Ignoring the GraphQL query variables content due to the syntax error: {reason}"
            ),
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Reports diagnostics as `tracing` errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::VariablesDropped { target, .. } => {
                tracing::error!(%target, "{diagnostic}");
            }
        }
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}
