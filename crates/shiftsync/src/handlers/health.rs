//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// GET /health - returns 200 as soon as the server accepts connections.
#[axum::debug_handler]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
