//! Static assets compiled into the binary.

use axum::http::header;
use axum::response::IntoResponse;

/// The demo page driver script.
const DEMO_JS: &str = include_str!("../assets/demo.js");

/// `GET /assets/demo.js`.
pub async fn demo_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        DEMO_JS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_targets_the_demo_api() {
        assert!(DEMO_JS.contains("data-api-base"));
        assert!(DEMO_JS.contains("/call"));
        assert!(DEMO_JS.contains("/tick"));
    }
}
