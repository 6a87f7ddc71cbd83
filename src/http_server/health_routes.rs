//! Health HTTP Routes
//!
//! Root welcome document, health check and the JSON 404 fallback.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

use super::errors::RestError;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Root and health routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
}

/// Welcome document listing the endpoints
async fn welcome_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Welcome to the String Analyzer API!",
            "endpoints": {
                "analyze": "POST /strings",
                "getOne": "GET /strings/:value",
                "getAll": "GET /strings",
                "filterNatural": "GET /strings/filter-by-natural-language",
                "delete": "DELETE /strings/:value"
            }
        })),
    )
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Fallback for unmatched routes
pub async fn not_found_handler() -> RestError {
    RestError::EndpointNotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
