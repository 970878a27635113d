//! Generative-language transport.
//!
//! The dispatcher only needs one capability from the outside world: given a
//! model id and a prompt, return the model's answer or say why it failed.
//! [`GenerativeTransport`] is that seam; [`gemini::GeminiTransport`] is the
//! production implementation.

pub mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_output_tokens: 600,
        }
    }
}

/// Why a single candidate model did not produce an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response contained no answer text")]
    EmptyAnswer,
}

/// Outbound generation capability.
///
/// Implementations perform exactly one remote call per invocation and never
/// retry; sequencing across models is the dispatcher's job.
#[async_trait]
pub trait GenerativeTransport: Send + Sync {
    /// Ask `model_id` to complete `prompt`.
    async fn generate(
        &self,
        model_id: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, CandidateError>;
}
