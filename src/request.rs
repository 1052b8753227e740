//! Incoming HTTP request type.

use std::collections::HashMap;

use http::{Method, Uri};
use percent_encoding::percent_decode_str;

/// An incoming HTTP request, reduced to what handlers look at.
///
/// Headers and body are not retained: no route reads them.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: HashMap<String, String>,
}

impl Request {
    /// Builds a request from a method and a request target such as
    /// `/greet?name=Daniel`.
    pub fn new(method: Method, uri: &Uri) -> Self {
        Self {
            method,
            path: uri.path().to_owned(),
            query: uri.query().map(parse_query).unwrap_or_default(),
        }
    }

    pub(crate) fn from_parts(parts: http::request::Parts) -> Self {
        Self::new(parts.method, &parts.uri)
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { &self.path }

    /// Returns a decoded query parameter. Keys are case-sensitive; when a key
    /// repeats, the last value wins.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

fn parse_query(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// `+` reads as a space. A component whose escapes do not decode to UTF-8 is
/// kept as written rather than patched with replacement characters.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match percent_decode_str(&spaced).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
