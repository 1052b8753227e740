//! Liveness and readiness probes.
//!
//! | Probe | Path | Answer |
//! |---|---|---|
//! | **Liveness** | `/health` | `200 OK`, body `OK`. Failure → restart. |
//! | **Readiness** | `/ready` | `200 OK`, `{"status":"ready","time":…}`. |
//!
//! Both are registered with [`Router::get`](crate::Router::get), so `HEAD`
//! works on either path.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::response::Json;
use crate::Request;

/// Readiness payload.
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    /// Wall-clock UTC time at handling, ISO-8601 with milliseconds and `Z`.
    pub time: String,
}

impl Readiness {
    pub fn now() -> Self {
        Self {
            status: "ready",
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Liveness probe handler. No dependencies; if it runs, the process is alive.
pub async fn liveness(_req: Request) -> &'static str {
    "OK"
}

/// Readiness probe handler.
pub async fn readiness(_req: Request) -> Json<Readiness> {
    Json(Readiness::now())
}
