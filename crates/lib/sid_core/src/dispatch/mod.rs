//! Multi-model fallback dispatch.
//!
//! A dispatch walks the configured candidate list in order, one remote call
//! per candidate, and stops at the first well-formed answer. A failing
//! candidate never aborts the dispatch; it only moves on to the next one.
//! When every candidate has failed the result is [`DispatchResult::Exhausted`],
//! which is an ordinary value for the caller to handle.

pub mod config;

use std::sync::Arc;

use tracing::{info, warn};

use crate::generative::{CandidateError, GenerativeTransport};

pub use config::{DEFAULT_CANDIDATES, DEFAULT_PREAMBLE, DispatcherConfig};

/// What one candidate did with the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success(String),
    Failure(CandidateError),
}

/// Outcome of trying a single candidate model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAttemptResult {
    pub model_id: String,
    pub outcome: AttemptOutcome,
}

/// Outcome of a full dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// First candidate that produced an answer.
    Answered { model_id: String, text: String },
    /// Every candidate failed, in the order they were tried.
    Exhausted { failures: Vec<ModelAttemptResult> },
}

impl DispatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Answered { .. })
    }
}

/// Sequential fallback dispatcher over a [`GenerativeTransport`].
pub struct Dispatcher {
    config: DispatcherConfig,
    transport: Arc<dyn GenerativeTransport>,
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig, transport: Arc<dyn GenerativeTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Try one candidate.
    async fn attempt(&self, model_id: &str, prompt: &str) -> ModelAttemptResult {
        let outcome = match self
            .transport
            .generate(model_id, prompt, &self.config.generation)
            .await
        {
            Ok(text) => AttemptOutcome::Success(text),
            Err(e) => AttemptOutcome::Failure(e),
        };
        ModelAttemptResult {
            model_id: model_id.to_string(),
            outcome,
        }
    }

    /// Send `message` to each candidate in priority order until one answers.
    pub async fn dispatch(&self, message: &str) -> DispatchResult {
        let prompt = self.config.render_prompt(message);
        let total = self.config.candidates.len();
        let mut failures = Vec::with_capacity(total);

        for (index, model_id) in self.config.candidates.iter().enumerate() {
            info!(model = %model_id, attempt = index + 1, total, "trying model");

            let result = self.attempt(model_id, &prompt).await;
            match result.outcome {
                AttemptOutcome::Success(text) => {
                    info!(model = %model_id, "model answered");
                    return DispatchResult::Answered {
                        model_id: result.model_id,
                        text,
                    };
                }
                AttemptOutcome::Failure(ref error) => {
                    warn!(model = %model_id, error = %error, "model failed");
                    failures.push(result);
                }
            }
        }

        warn!(attempts = failures.len(), "all model attempts failed");
        DispatchResult::Exhausted { failures }
    }
}
