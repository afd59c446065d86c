//! HTTP error bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Build a JSON error response in the shared envelope shape.
pub fn error_response(status: StatusCode, category: &str, message: &str) -> Response {
    let body = serde_json::json!({
        "error": {
            "category": category,
            "message": message,
        }
    });
    (status, Json(body)).into_response()
}
