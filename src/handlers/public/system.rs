// handlers/public/system.rs - API root and health check

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - API root listing the resources
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Profiles API",
        "version": version,
        "endpoints": {
            "hello-view": "/hello-view/",
            "hello-viewset": "/hello-viewset/",
            "profile": "/profile/",
            "health": "/health",
        }
    }))
}

/// GET /health - liveness plus a store probe
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let backend = state.store.backend();

    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "store": "ok",
                "backend": backend,
                "timestamp": now
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "store": "unavailable",
                    "backend": backend,
                    "timestamp": now
                })),
            )
        }
    }
}
