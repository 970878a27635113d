//! API server configuration.

use std::fmt;

use crate::error::{AppError, AppResult};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8001;

/// Configuration for the API server.
#[derive(Clone)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8001").
    pub bind_addr: String,
    /// Gemini API key. Chat requests fail with 500 until this is set.
    pub gemini_api_key: Option<String>,
}

impl ApiConfig {
    pub fn new(bind_addr: impl Into<String>, gemini_api_key: Option<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            gemini_api_key: gemini_api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Fail fast when no API key is configured.
    pub fn require_credential(&self) -> AppResult<()> {
        if self.has_credential() {
            Ok(())
        } else {
            Err(AppError::MissingCredential)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(format!("127.0.0.1:{DEFAULT_PORT}"), None)
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_fixed_port() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:8001");
        assert!(!config.has_credential());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = ApiConfig::new("127.0.0.1:0", Some("   ".into()));
        assert!(matches!(
            config.require_credential(),
            Err(AppError::MissingCredential)
        ));
    }

    #[test]
    fn debug_output_hides_key() {
        let config = ApiConfig::new("127.0.0.1:0", Some("secret-key".into()));
        assert!(config.require_credential().is_ok());
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
