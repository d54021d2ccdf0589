// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use encoding_rs::Encoding;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum UrlDecodeError {
    #[error("Incomplete trailing escape (%) pattern")]
    IncompleteEscape,
    #[error("Illegal hex characters in escape (%) pattern")]
    IllegalHex,
}

/// Picks the caller's encoding when one is named, the configured default otherwise.
///
/// An unknown label is returned as the error.
pub(crate) fn resolve_encoding<'a>(
    content_encoding: Option<&'a str>,
    default_encoding: &'static Encoding,
) -> Result<&'static Encoding, &'a str> {
    match content_encoding {
        Some(label) if !label.is_empty() => Encoding::for_label(label.as_bytes()).ok_or(label),
        _ => Ok(default_encoding),
    }
}

/// Decodes a request body. Malformed sequences become U+FFFD; a byte order mark, if present,
/// overrides `encoding`.
pub(crate) fn decode_body(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Form-style URL decoding: `+` is a space and each run of `%XX` escapes is decoded as bytes in
/// `encoding`. Everything else is kept as is.
pub(crate) fn url_decode(
    value: &str,
    encoding: &'static Encoding,
) -> Result<String, UrlDecodeError> {
    let bytes = value.as_bytes();
    let mut decoded = String::with_capacity(value.len());
    let mut escaped = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push_str(&value[literal_start..i]);
                decoded.push(' ');
                i += 1;
                literal_start = i;
            }
            b'%' => {
                decoded.push_str(&value[literal_start..i]);
                escaped.clear();

                while i < bytes.len() && bytes[i] == b'%' {
                    let hex = bytes
                        .get(i + 1..i + 3)
                        .ok_or(UrlDecodeError::IncompleteEscape)?;
                    escaped.push(hex_byte(hex).ok_or(UrlDecodeError::IllegalHex)?);
                    i += 3;
                }

                let (text, _) = encoding.decode_without_bom_handling(&escaped);
                decoded.push_str(&text);
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    decoded.push_str(&value[literal_start..]);
    Ok(decoded)
}

fn hex_byte(hex: &[u8]) -> Option<u8> {
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    std::str::from_utf8(hex)
        .ok()
        .and_then(|hex| u8::from_str_radix(hex, 16).ok())
}
