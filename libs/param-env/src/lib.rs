// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Read-only access to configuration values.
//!
//! Everything that consults configuration takes a `&dyn Environment` so that tests can supply
//! a [`MapEnvironment`] instead of touching the process environment.

mod map;

pub use map::MapEnvironment;

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn get_or_else(&self, key: &str, default_value: &str) -> String {
        self.get(key).unwrap_or_else(|| default_value.to_string())
    }

    /// Like `get`, but treats a value that is empty after trimming as unset.
    fn get_non_blank(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid env value {env_value} for {env_key}: {message}")]
    InvalidValue {
        env_key: &'static str,
        env_value: String,
        message: String,
    },
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
