// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use mime::Mime;

/// Whether a `Content-Type` header value announces a GraphQL-over-HTTP JSON body.
///
/// Parameters such as `charset` are ignored. Values that cannot be parsed as a media type are
/// treated as not matching.
pub fn is_graphql_content_type(content_type: Option<&str>) -> bool {
    // Only the media type matters, so parameters are cut off before parsing.
    let media_type = content_type
        .and_then(|content_type| content_type.split(';').next())
        .map(str::trim)
        .unwrap_or_default();
    if media_type.is_empty() {
        return false;
    }

    match media_type.parse::<Mime>() {
        Ok(mime) => mime.essence_str() == mime::APPLICATION_JSON.essence_str(),
        Err(e) => {
            tracing::debug!("Unparseable content type '{media_type}': {e}");
            false
        }
    }
}
