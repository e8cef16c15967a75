use axum::response::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness probe. Does not touch upstream.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
