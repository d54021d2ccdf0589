// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Tracing configuration setup.
//!
//! The converter is instrumented with Rust's `tracing` framework.
//!
//! Calling the `init` function will initialize a global tracing subscriber based on the value of
//! the `GQL_LOG` environment variable which follows the same conventions as `RUST_LOG`. Output
//! goes to stderr so that it never mixes with converted payloads written to stdout.

use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

use crate::env_const::GQL_LOG;

/// Initialize the tracing subscriber.
///
/// Creates a compact `tracing_subscriber::fmt` layer filtered by `GQL_LOG` (default: `warn`).
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(GQL_LOG)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
