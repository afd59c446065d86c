//! Health check endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

use liftgate_core::Locale;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Number of supported locales.
    pub locale_count: usize,
}

/// `GET /healthz`: report server status.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        server_name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        locale_count: Locale::ALL.len(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_healthz_reports_all_locales() {
        let Json(body) = healthz().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.server_name, "liftgate-server");
        assert_eq!(body.locale_count, 5);
    }

    #[test]
    fn test_health_response_round_trip() {
        let json = r#"{"status":"healthy","server_name":"liftgate-server","version":"0.3.0","locale_count":5}"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.locale_count, 5);
    }
}
