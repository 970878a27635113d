//! Dispatcher configuration.

use crate::generative::GenerationParams;

/// Candidate models, highest priority first.
pub const DEFAULT_CANDIDATES: [&str; 4] = [
    "gemini-1.5-flash-latest",
    "gemini-1.5-pro-latest",
    "gemini-pro",
    "gemini-1.0-pro",
];

pub const DEFAULT_PREAMBLE: &str =
    "You are SID (Smart Intelligent Assistant), a helpful AI assistant.";

/// Immutable settings for a [`Dispatcher`](super::Dispatcher).
#[derive(Debug, Clone, PartialEq)]
pub struct DispatcherConfig {
    /// Model ids in the order they are tried.
    pub candidates: Vec<String>,
    /// System preamble placed before every user message.
    pub preamble: String,
    pub generation: GenerationParams,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect(),
            preamble: DEFAULT_PREAMBLE.to_string(),
            generation: GenerationParams::default(),
        }
    }
}

impl DispatcherConfig {
    /// Replace the candidate list, keeping priority order.
    ///
    /// Ids are trimmed and blanks dropped. If nothing is left the current list
    /// is kept.
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed: Vec<String> = candidates
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if !parsed.is_empty() {
            self.candidates = parsed;
        }
        self
    }

    /// Render the full prompt for one user message.
    pub fn render_prompt(&self, message: &str) -> String {
        format!("{}\n\nUser: {message}\n\nAssistant:", self.preamble)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_candidates_in_priority_order() {
        let config = DispatcherConfig::default();
        assert_eq!(config.candidates.len(), 4);
        assert_eq!(config.candidates[0], "gemini-1.5-flash-latest");
        assert_eq!(config.candidates[3], "gemini-1.0-pro");
    }

    #[test]
    fn prompt_wraps_message_after_preamble() {
        let config = DispatcherConfig::default();
        let prompt = config.render_prompt("What is Rust?");
        assert_eq!(
            prompt,
            "You are SID (Smart Intelligent Assistant), a helpful AI assistant.\n\n\
             User: What is Rust?\n\nAssistant:"
        );
    }

    #[test]
    fn candidate_override_trims_and_skips_blanks() {
        let config = DispatcherConfig::default().with_candidates([" model-b ", "", "model-a"]);
        assert_eq!(config.candidates, vec!["model-b", "model-a"]);
    }

    #[test]
    fn empty_override_keeps_defaults() {
        let config = DispatcherConfig::default().with_candidates([" ", ""]);
        assert_eq!(config, DispatcherConfig::default());
    }
}
