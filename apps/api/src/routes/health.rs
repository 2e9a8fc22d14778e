use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Fixed healthy status; performs no dependency checks.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "ml_api"
    }))
}
