//! HTTP client for the SID API.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Serialize)]
struct ChatBody<'a> {
    message: &'a str,
}

/// Successful chat payload.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub model: String,
    pub note: Option<String>,
}

#[derive(Deserialize)]
struct ChatEnvelope {
    success: bool,
    data: Option<ChatReply>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Health {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

pub struct SidClient {
    http: reqwest::Client,
    base_url: String,
}

impl SidClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `POST /api/chat`. Error payloads come back as [`Error::Server`].
    pub async fn send(&self, message: &str) -> Result<ChatReply> {
        let envelope: ChatEnvelope = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&ChatBody { message })
            .send()
            .await?
            .json()
            .await?;

        match envelope {
            ChatEnvelope {
                success: true,
                data: Some(reply),
                ..
            } => Ok(reply),
            ChatEnvelope { message, .. } => Err(Error::Server(
                message.unwrap_or_else(|| "unexpected response".to_string()),
            )),
        }
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<Health> {
        let health = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(health)
    }
}
