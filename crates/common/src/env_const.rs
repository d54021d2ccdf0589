// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use encoding_rs::Encoding;
use param_env::{EnvError, Environment};

pub const GQL_URL_ARGUMENT_ENCODING: &str = "GQL_URL_ARGUMENT_ENCODING";
pub const GQL_LOG: &str = "GQL_LOG";

pub const DEFAULT_URL_ARGUMENT_ENCODING: &str = "UTF-8";

/// The text encoding used for request bodies and URL arguments when the caller does not name one.
pub fn get_url_argument_encoding(env: &dyn Environment) -> Result<&'static Encoding, EnvError> {
    let label = env
        .get_non_blank(GQL_URL_ARGUMENT_ENCODING)
        .unwrap_or_else(|| DEFAULT_URL_ARGUMENT_ENCODING.to_string());

    Encoding::for_label(label.as_bytes()).ok_or_else(|| EnvError::InvalidValue {
        env_key: GQL_URL_ARGUMENT_ENCODING,
        env_value: label,
        message: "Must be a known text encoding label such as 'UTF-8' or 'ISO-8859-1'".to_string(),
    })
}
