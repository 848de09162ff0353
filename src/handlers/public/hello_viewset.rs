// handlers/public/hello_viewset.rs - /hello-viewset/ demo endpoints

use axum::extract::Path;

use super::hello::greet;
use crate::api::{HelloRequest, JsonBody};
use crate::middleware::{ApiResponse, ApiResult};

const A_VIEWSET: [&str; 3] = [
    "Uses actions (list, create, retrieve, update, partial_update)",
    "Automatically maps to URLs using Routers",
    "Provides more functionality with less code",
];

/// GET /hello-viewset/
pub async fn list() -> ApiResponse {
    ApiResponse::success("message", "Hello").and("a_viewset", A_VIEWSET)
}

/// POST /hello-viewset/
pub async fn create(JsonBody(body): JsonBody<HelloRequest>) -> ApiResult {
    greet(body)
}

/// GET /hello-viewset/:id
pub async fn retrieve(Path(_id): Path<String>) -> ApiResponse {
    ApiResponse::success("http method", "GET")
}

/// PUT /hello-viewset/:id
pub async fn update(Path(_id): Path<String>) -> ApiResponse {
    ApiResponse::success("http method", "PUT")
}

/// PATCH /hello-viewset/:id
pub async fn partial_update(Path(_id): Path<String>) -> ApiResponse {
    ApiResponse::success("http method", "PATCH")
}

/// DELETE /hello-viewset/:id
pub async fn destroy(Path(_id): Path<String>) -> ApiResponse {
    ApiResponse::success("http method", "DELETE")
}
