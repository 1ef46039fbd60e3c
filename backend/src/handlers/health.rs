//! Health check handlers

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Root endpoint
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "DIU Result API is working! Use /result?student_id=YOUR_ID".to_string(),
    })
}

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
