// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Name/value arguments as they appear in a URL query string or form body.

/// The separator marker of an argument that was written as `name=value`.
pub const EQUALS: &str = "=";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// A generic argument that is not sent over HTTP.
    Plain,
    /// An HTTP argument. When `always_encoded` is set, `value` holds raw text that is
    /// percent-encoded on the way out; otherwise `value` is exactly what goes on the wire.
    Http { always_encoded: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub value: String,
    pub metadata: String,
    pub kind: ArgumentKind,
}

impl Argument {
    pub fn plain(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            metadata: EQUALS.to_string(),
            kind: ArgumentKind::Plain,
        }
    }

    pub fn http(name: impl Into<String>, value: impl Into<String>, always_encoded: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            metadata: EQUALS.to_string(),
            kind: ArgumentKind::Http { always_encoded },
        }
    }

    pub fn with_metadata(self, metadata: impl Into<String>) -> Self {
        Self {
            metadata: metadata.into(),
            ..self
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self.kind, ArgumentKind::Http { .. })
    }

    pub fn is_always_encoded(&self) -> bool {
        matches!(
            self.kind,
            ArgumentKind::Http {
                always_encoded: true
            }
        )
    }

    fn to_wire(&self) -> String {
        if self.is_always_encoded() {
            format!("{}{}{}", self.name, self.metadata, urlencoding::encode(&self.value))
        } else {
            format!("{}{}{}", self.name, self.metadata, self.value)
        }
    }
}

/// An ordered argument list. Duplicate names are kept; consumers decide which one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    inner: Vec<Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Self { inner: vec![] }
    }

    pub fn from_vec(inner: Vec<Argument>) -> Self {
        Self { inner }
    }

    pub fn push(&mut self, argument: Argument) {
        self.inner.push(argument);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Splits a URL query string into HTTP arguments whose values are still encoded.
    pub fn parse_query_string(query_string: &str) -> Self {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);

        let inner = query_string
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once(EQUALS) {
                Some((name, value)) => Argument::http(name, value, false),
                None => Argument::http(pair, "", false).with_metadata(""),
            })
            .collect();

        Self { inner }
    }

    /// Joins the HTTP arguments back into a URL query string.
    pub fn to_query_string(&self) -> String {
        self.inner
            .iter()
            .filter(|argument| argument.is_http())
            .map(Argument::to_wire)
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl IntoIterator for Arguments {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl FromIterator<Argument> for Arguments {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
