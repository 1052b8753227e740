//! # greeter
//!
//! A small HTTP service: two Kubernetes-style probes and a greeting.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/health` | `200`, `OK` |
//! | GET | `/ready` | `200`, `{"status":"ready","time":"<ISO-8601>"}` |
//! | GET | `/` | `200`, `Hi there` |
//! | GET | `/greet?name=X` | `200`, `Hello, X!`; `400` when `name` is absent or empty |
//!
//! Every GET route also answers HEAD with the same status and headers and no
//! body. Anything else, including a known path under another method, is 404.
//! Paths match regardless of ASCII case and one trailing slash.
//!
//! ## Running
//!
//! ```rust,no_run
//! use greeter::{Config, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), greeter::Error> {
//!     let config = Config::from_env()?;
//!     Server::bind(config.addr()).await?.serve(greeter::app()).await
//! }
//! ```
//!
//! ## Testing without a socket
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use greeter::Request;
//! use http::{Method, StatusCode};
//!
//! let req = Request::new(Method::GET, &"/greet?name=Daniel".parse().unwrap());
//! let res = greeter::app().dispatch(req).await;
//! assert_eq!(res.status(), StatusCode::OK);
//! assert_eq!(res.body().as_ref(), b"Hello, Daniel!");
//! # }
//! ```

mod config;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod greet;
pub mod health;

pub use config::{Config, DEFAULT_PORT};
pub use error::{Error, Rejection};
pub use handler::Handler;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;

/// Builds the service's route table.
pub fn app() -> Router {
    Router::new()
        .get("/", greet::root)
        .get("/greet", greet::greet)
        .get("/health", health::liveness)
        .get("/ready", health::readiness)
}
