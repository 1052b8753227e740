//! Handler trait and type erasure.
//!
//! # How handlers are stored
//!
//! The router keeps handlers of different concrete types in one
//! `HashMap<Method, Tree>`, so each one is erased behind [`ErasedHandler`]
//! and shared as a [`BoxedHandler`]:
//!
//! ```text
//! async fn greet(req: Request) -> Result<Response, Rejection>
//!        ↓ router.get("/greet", greet)
//! greet.into_boxed_handler()                  ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(greet))                  ← stored for GET
//! Arc::new(HeadHandler(Arc::clone(&get)))     ← stored for HEAD
//!        ↓
//! handler.call(req)                           ← one vtable dispatch per request
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Internal types ────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future that resolves to a [`Response`].
///
/// `Send + 'static` so tokio can move it between worker threads.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// Satisfied automatically by any `async fn` shaped like:
///
/// ```text
/// async fn name(req: Request) -> impl IntoResponse
/// ```
///
/// Sealed: only the blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrappers ─────────────────────────────────────────────────────────

/// Bridges a concrete handler function to [`ErasedHandler`].
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

/// HEAD counterpart of a GET handler.
///
/// Runs the GET logic unchanged and discards the body, so status and
/// headers are exactly what GET would have sent.
pub(crate) struct HeadHandler(pub(crate) BoxedHandler);

impl ErasedHandler for HeadHandler {
    fn call(&self, req: Request) -> BoxFuture {
        let fut = self.0.call(req);
        Box::pin(async move { fut.await.without_body() })
    }
}

#[cfg(test)]
mod tests {
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::{Method, StatusCode};

    use super::*;

    fn req(method: Method, target: &str) -> Request {
        Request::new(method, &target.parse().unwrap())
    }

    async fn echo_path(req: Request) -> String {
        format!("path={}", req.path())
    }

    async fn teapot(_req: Request) -> StatusCode {
        StatusCode::IM_A_TEAPOT
    }

    #[tokio::test]
    async fn fn_handler_converts_return_value() {
        let handler = echo_path.into_boxed_handler();
        let res = handler.call(req(Method::GET, "/abc")).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body().as_ref(), b"path=/abc");
    }

    #[tokio::test]
    async fn head_handler_strips_body_only() {
        let get = echo_path.into_boxed_handler();
        let head = HeadHandler(Arc::clone(&get));

        let full = get.call(req(Method::GET, "/abc")).await;
        let bare = head.call(req(Method::HEAD, "/abc")).await;

        assert_eq!(bare.status(), full.status());
        assert_eq!(bare.headers()[CONTENT_TYPE], full.headers()[CONTENT_TYPE]);
        assert_eq!(bare.headers()[CONTENT_LENGTH], "9");
        assert!(bare.body().is_empty());
    }

    #[tokio::test]
    async fn head_handler_preserves_non_200_status() {
        let head = HeadHandler(teapot.into_boxed_handler());
        let res = head.call(req(Method::HEAD, "/")).await;
        assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(res.headers()[CONTENT_LENGTH], "0");
    }
}
