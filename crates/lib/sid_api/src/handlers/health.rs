//! Liveness and index endpoints.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::models::{EndpointList, HealthResponse, IndexResponse};

pub const SERVICE_NAME: &str = "SID AI Backend (Gemini)";

/// `GET /health` — always OK while the process is serving.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".into(),
        service: SERVICE_NAME.into(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// `GET /` — service banner and endpoint list.
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "🚀 SID AI Assistant API is running!".into(),
        description: "Testing Gemini models".into(),
        endpoints: EndpointList {
            chat: "POST /api/chat".into(),
            health: "GET /health".into(),
        },
    })
}
