// handlers/public/hello.rs - /hello-view/ demo endpoints

use crate::api::{HelloRequest, JsonBody};
use crate::middleware::{ApiResponse, ApiResult};

const AN_APIVIEW: [&str; 4] = [
    "Uses HTTP methods as function (get, post, patch, put, delete)",
    "Is similar to a traditional Django view",
    "Gives you the most control over your application logic",
    "Is mapped manually to URLs",
];

/// GET /hello-view/ - list of view features
pub async fn hello_view_get() -> ApiResponse {
    ApiResponse::success("message", "Hello").and("an_apiview", AN_APIVIEW)
}

/// POST /hello-view/ - greet the given name
pub async fn hello_view_post(JsonBody(body): JsonBody<HelloRequest>) -> ApiResult {
    greet(body)
}

/// PUT /hello-view/
pub async fn hello_view_put() -> ApiResponse {
    ApiResponse::success("method", "PUT")
}

/// PATCH /hello-view/
pub async fn hello_view_patch() -> ApiResponse {
    ApiResponse::success("method", "PATCH")
}

/// DELETE /hello-view/
pub async fn hello_view_delete() -> ApiResponse {
    ApiResponse::success("method", "DELETE")
}

pub(crate) fn greet(body: HelloRequest) -> ApiResult {
    let name = body.into_name()?;
    Ok(ApiResponse::success("message", format!("Hello {}", name)))
}
