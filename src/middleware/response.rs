use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Success response wrapped under one or more descriptive keys,
/// e.g. `{"users": [...]}` or `{"Success": "...", "user": {...}}`.
#[derive(Debug)]
pub struct ApiResponse {
    body: Result<Map<String, Value>, serde_json::Error>,
    status_code: StatusCode,
}

impl ApiResponse {
    /// Create a 200 OK response with a single key
    pub fn success(key: &str, data: impl Serialize) -> Self {
        Self::with_status(key, data, StatusCode::OK)
    }

    /// Create a 201 Created response
    pub fn created(key: &str, data: impl Serialize) -> Self {
        Self::with_status(key, data, StatusCode::CREATED)
    }

    pub fn with_status(key: &str, data: impl Serialize, status_code: StatusCode) -> Self {
        Self {
            body: Ok(Map::new()),
            status_code,
        }
        .and(key, data)
    }

    /// Add another key to the envelope
    pub fn and(mut self, key: &str, data: impl Serialize) -> Self {
        self.body = self.body.and_then(|mut body| {
            body.insert(key.to_string(), serde_json::to_value(data)?);
            Ok(body)
        });
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self.body {
            Ok(body) => (self.status_code, Json(Value::Object(body))).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "detail": "Failed to serialize response data",
                        "code": "INTERNAL_SERVER_ERROR"
                    })),
                )
                    .into_response()
            }
        }
    }
}

// Convenience type alias
pub type ApiResult = Result<ApiResponse, crate::error::ApiError>;
