//! Error types.
//!
//! Two families:
//!
//! - [`Error`] is for infrastructure failures (binding a port, reading
//!   configuration). It never reaches a client.
//! - [`Rejection`] is for requests the service refuses. Every variant maps
//!   to exactly one status code and renders through [`IntoResponse`].

use http::StatusCode;

use crate::response::{IntoResponse, Response};

/// The error type returned by greeter's fallible operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid {key}={value:?}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// A request the router or a handler declined to serve.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Rejection {
    /// A required query parameter was absent or empty.
    #[error("{} query parameter is required", capitalize(.0))]
    MissingParameter(&'static str),

    /// No route matches the (method, path) pair. Known path with an
    /// unregistered method lands here too.
    #[error("Not Found")]
    RouteNotFound,
}

impl Rejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        Response::builder().status(self.status()).text(self.to_string())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
