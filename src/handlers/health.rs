use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::response::Envelope;

#[derive(Debug, Serialize)]
pub(crate) struct HealthStatus {
    pub(crate) status: &'static str,
    /// RFC 3339, UTC
    pub(crate) time: String,
}

/// Handler for `GET /api/health`
///
/// Does not touch the store, so it stays green while the database is down.
pub(crate) async fn health() -> Json<Envelope<HealthStatus>> {
    Json(Envelope::with_data(
        "Server is running",
        HealthStatus {
            status: "healthy",
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        },
    ))
}
