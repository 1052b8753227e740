//! Radix-tree request router.
//!
//! One tree per HTTP method. Build it once at start-up, then share it
//! read-only. A request either hits exactly one handler or is rejected
//! with 404; a known path under an unregistered method is a 404 as well.
//!
//! Matching ignores ASCII case and a single trailing slash, so `/health`,
//! `/HEALTH` and `/health/` all reach the same handler. `/health//` does not.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::error::Rejection;
use crate::handler::{BoxedHandler, Handler, HeadHandler};
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// The application router.
///
/// Immutable once built: [`Router::get`] consumes and returns `self`, and
/// serving takes ownership.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a GET handler and its derived HEAD handler.
    ///
    /// HEAD runs the same handler and drops the body before it is sent.
    ///
    /// ```rust
    /// # use greeter::{Request, Router};
    /// # async fn liveness(_: Request) -> &'static str { "OK" }
    /// Router::new().get("/health", liveness);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or is already registered.
    /// Both are start-up programming errors.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        let get = handler.into_boxed_handler();
        let head: BoxedHandler = Arc::new(HeadHandler(Arc::clone(&get)));
        self.insert(Method::GET, path, get)
            .insert(Method::HEAD, path, head)
    }

    fn insert(mut self, method: Method, path: &str, handler: BoxedHandler) -> Self {
        let route = normalize(path).into_owned();
        self.routes
            .entry(method)
            .or_default()
            .insert(route, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, method: &Method, path: &str) -> Option<BoxedHandler> {
        let tree = self.routes.get(method)?;
        let normalized = normalize(path);
        let matched = tree.at(&normalized).ok()?;
        Some(Arc::clone(matched.value))
    }

    /// Routes one request to its handler and returns the response.
    pub async fn dispatch(&self, req: Request) -> Response {
        match self.lookup(&req.method, &req.path) {
            Some(handler) => handler.call(req).await,
            None => Rejection::RouteNotFound.into_response(),
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

/// Lowercases `path` and drops one trailing slash, leaving `/` alone.
fn normalize(path: &str) -> Cow<'_, str> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    if trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(trimmed.to_ascii_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}
