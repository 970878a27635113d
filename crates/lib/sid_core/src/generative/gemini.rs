//! Gemini `generateContent` client.
//!
//! Calls `POST {base}/v1beta/models/{model}:generateContent?key={key}` once per
//! invocation. The answer is read from `candidates[0].content.parts[*].text`;
//! a body carrying an `error` object is a failure whatever the HTTP status.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CandidateError, GenerationParams, GenerativeTransport};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the Gemini API.
#[derive(Clone)]
pub struct GeminiConfig {
    /// Scheme + host, without the `/v1beta` path.
    pub base_url: String,
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Upper bound for one candidate call, connect to last body byte.
    pub request_timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Full `generateContent` URL for a model, without the key.
    pub fn endpoint(&self, model_id: &str) -> String {
        format!(
            "{}/v1beta/models/{model_id}:generateContent",
            self.base_url.trim_end_matches('/')
        )
    }
}

// Keep the key out of logs.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: &'a GenerationParams,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str, params: &'a GenerationParams) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: params,
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
    error: Option<ResponseError>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ResponseError {
    #[serde(default)]
    message: String,
}

/// Pull the answer text out of a raw `generateContent` response body.
fn extract_answer(status: StatusCode, body: &str) -> Result<String, CandidateError> {
    let data: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| CandidateError::InvalidBody(e.to_string()))?;

    if let Some(error) = data.error {
        return Err(CandidateError::Api {
            status: status.as_u16(),
            message: error.message,
        });
    }

    let text: String = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(text);
    }

    if !status.is_success() {
        return Err(CandidateError::Api {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        });
    }

    Err(CandidateError::EmptyAnswer)
}

/// [`GenerativeTransport`] backed by the Gemini REST API.
pub struct GeminiTransport {
    client: Client,
    config: GeminiConfig,
}

impl GeminiTransport {
    /// Wrap a shared `reqwest` client. The client's connection pool is reused
    /// across candidates and requests.
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl GenerativeTransport for GeminiTransport {
    async fn generate(
        &self,
        model_id: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, CandidateError> {
        let url = self.config.endpoint(model_id);
        debug!(model = %model_id, url = %url, "calling generateContent");

        // `without_url` strips the query string, which carries the key.
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .timeout(self.config.request_timeout)
            .json(&GenerateContentRequest::new(prompt, params))
            .send()
            .await
            .map_err(|e| CandidateError::Transport(e.without_url().to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| CandidateError::Transport(e.without_url().to_string()))?;

        extract_answer(status, &body)
    }
}
