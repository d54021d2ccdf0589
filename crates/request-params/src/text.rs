// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\n\x0B\f\r]+").expect("Hard coded whitespace pattern shouldn't fail")
});

/// Strips leading and trailing spaces and control characters.
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

pub(crate) fn trim_to_none(text: &str) -> Option<&str> {
    Some(trim(text)).filter(|trimmed| !trimmed.is_empty())
}

pub(crate) fn is_blank(text: &str) -> bool {
    trim(text).is_empty()
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACES.replace_all(text, " ").into_owned()
}

/// The lightweight stand-in for parsing: a query must open with one of the two operation
/// keywords that are allowed over HTTP.
pub(crate) fn has_operation_prefix(query: &str) -> bool {
    query.starts_with("query") || query.starts_with("mutation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiplatform_test::multiplatform_test;

    #[multiplatform_test]
    fn trims_control_characters() {
        assert_eq!(trim("\u{0}\t query { a } \r\n"), "query { a }");
        assert_eq!(trim_to_none(" \t "), None);
        assert_eq!(trim_to_none(" Op "), Some("Op"));
    }

    #[multiplatform_test]
    fn collapses_every_whitespace_run() {
        assert_eq!(
            collapse_whitespace("query\n\t{ a  b }\u{0B}\u{0C}c"),
            "query { a b } c"
        );
        assert_eq!(collapse_whitespace("a\u{A0}b"), "a\u{A0}b");
    }

    #[multiplatform_test]
    fn blank_uses_the_same_rule_as_trim() {
        assert!(is_blank(" \t\r\n\u{0}"));
        assert!(!is_blank("\u{A0}"));
        assert_eq!(trim_to_none("\u{A0}"), Some("\u{A0}"));
    }

    #[multiplatform_test]
    fn operation_prefix_is_case_sensitive() {
        assert!(has_operation_prefix("query { a }"));
        assert!(has_operation_prefix("mutation M { a }"));
        assert!(has_operation_prefix("queryish"));
        assert!(!has_operation_prefix("Query { a }"));
        assert!(!has_operation_prefix("{ a }"));
        assert!(!has_operation_prefix("subscription { a }"));
        assert!(!has_operation_prefix(" query { a }"));
    }
}
