//! Greeting endpoints.

use crate::error::Rejection;
use crate::{Request, Response};

/// `GET /`
pub async fn root(_req: Request) -> &'static str {
    "Hi there"
}

/// `GET /greet?name=…`
///
/// The name is echoed back verbatim after query decoding. An absent or empty
/// `name` is rejected with 400.
pub async fn greet(req: Request) -> Result<Response, Rejection> {
    let name = req
        .query("name")
        .filter(|name| !name.is_empty())
        .ok_or(Rejection::MissingParameter("name"))?;
    Ok(Response::text(format!("Hello, {name}!")))
}
