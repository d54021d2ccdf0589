// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use request_params::{Arguments, GraphQLRequestParams, query_to_get_param_value};

mod common;

const QUERY: &str = r#"query GetConcerts($first: Int!) {
    concerts(first: $first, orderBy: {date: ASC}) {
        id
        title
    }
}"#;

const MUTATION: &str =
    "  mutation CreateVenue($data: VenueCreationInput!) {\n\tcreateVenue(data: $data) { id }\n}\n";

fn samples() -> Vec<GraphQLRequestParams> {
    vec![
        common::params(None, "query { ping }", None),
        common::params(Some("GetConcerts"), QUERY, Some(r#"{"first": 10}"#)),
        common::params(
            Some(" CreateVenue "),
            MUTATION,
            Some(r#"{"data": {"name": "Hall & Co", "tags": ["a+b", "100%"], "capacity": null}}"#),
        ),
        common::params(Some(""), "query { café: venue(name: \"Zürich\") { id } }", Some("{}")),
    ]
}

fn assert_equivalent(original: &GraphQLRequestParams, decoded: &GraphQLRequestParams) {
    assert_eq!(
        query_to_get_param_value(decoded.query()),
        query_to_get_param_value(original.query())
    );
    assert_eq!(
        decoded.operation_name(),
        original.operation_name().map(str::trim).filter(|name| !name.is_empty())
    );
    assert_eq!(
        decoded.variables().map(common::json),
        original.variables().map(common::json)
    );
}

#[test]
fn post_body_round_trip() {
    let (converter, diagnostics) = common::converter();

    for original in samples() {
        let body = converter.to_post_body_string(&original).unwrap();
        let decoded = converter.from_post_body(body.as_bytes(), None).unwrap();

        assert_equivalent(&original, &decoded);
    }

    assert!(diagnostics.lock().unwrap().is_empty());
}

#[test]
fn post_body_round_trip_in_other_encodings() {
    let (converter, _) = common::converter();
    let original = common::params(Some("Ümlaut"), "query { ä }", Some(r#"{"ö":"ß"}"#));

    let body = converter.to_post_body_string(&original).unwrap();
    let (encoded, _, _) = encoding_rs::WINDOWS_1252.encode(&body);
    let decoded = converter
        .from_post_body(&encoded, Some("ISO-8859-1"))
        .unwrap();

    assert_equivalent(&original, &decoded);
}

#[test]
fn get_round_trip() {
    let (converter, diagnostics) = common::converter();

    for original in samples() {
        let query_string = converter.to_get_arguments(&original).to_query_string();
        let decoded = converter
            .from_arguments(&Arguments::parse_query_string(&query_string), None)
            .unwrap();

        assert_equivalent(&original, &decoded);
        assert_eq!(decoded.query(), query_to_get_param_value(original.query()));
    }

    assert!(diagnostics.lock().unwrap().is_empty());
}

#[test]
fn get_arguments_feed_back_directly() {
    let (converter, _) = common::converter();

    for original in samples() {
        let decoded = converter
            .from_arguments(&converter.to_get_arguments(&original), Some("bogus"))
            .unwrap();

        assert_equivalent(&original, &decoded);
    }
}

#[test]
fn body_and_get_forms_agree() {
    let (converter, _) = common::converter();

    for original in samples() {
        let body = converter.to_post_body_string(&original).unwrap();
        let from_body = converter.from_post_body(body.as_bytes(), None).unwrap();

        let query_string = converter.to_get_arguments(&original).to_query_string();
        let from_get = converter
            .from_arguments(&Arguments::parse_query_string(&query_string), None)
            .unwrap();

        assert_eq!(from_body.operation_name(), from_get.operation_name());
        assert_eq!(from_body.variables(), from_get.variables());
    }
}

#[test]
fn large_numbers_keep_their_digits() {
    let (converter, diagnostics) = common::converter();
    let variables = r#"{"id":12345678901234567890123}"#;

    let body = format!(r#"{{"query":"query {{ a }}","variables":{variables}}}"#);
    let decoded = converter.from_post_body(body.as_bytes(), None).unwrap();
    assert_eq!(decoded.variables(), Some(variables));

    assert_eq!(
        converter.to_post_body_string(&decoded).unwrap(),
        format!(r#"{{"operationName":null,"variables":{variables},"query":"query {{ a }}"}}"#)
    );
    assert_eq!(
        converter.variables_to_get_param_value(variables).as_deref(),
        Some(variables)
    );

    assert!(diagnostics.lock().unwrap().is_empty());
}
