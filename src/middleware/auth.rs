//! Authentication middleware
//!
//! Resolves the bearer token for outgoing requests. A token configured
//! directly wins; otherwise the token file is read on every request so that a
//! login elsewhere is picked up without restarting.

use std::path::PathBuf;
use reqwest::RequestBuilder;
use tracing::{debug, warn};
use crate::config::AuthConfig;

/// Token source for backend requests
#[derive(Clone, Debug, Default)]
pub struct AuthProvider {
    token: Option<String>,
    token_file: Option<PathBuf>,
}

impl AuthProvider {
    /// Create a new AuthProvider from configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            token: config
                .token
                .as_ref()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            token_file: config.token_file.as_ref().map(PathBuf::from),
        }
    }

    /// Provider that never sends a token
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Provider with a fixed token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            token_file: None,
        }
    }

    /// Whether any token source is configured
    pub fn is_configured(&self) -> bool {
        self.token.is_some() || self.token_file.is_some()
    }

    /// Current token, if one is present
    pub async fn current_token(&self) -> Option<String> {
        if let Some(token) = &self.token {
            return Some(token.clone());
        }

        let path = self.token_file.as_ref()?;
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    debug!(path = %path.display(), "Token file is empty");
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Token file not found, sending request without auth");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read token file");
                None
            }
        }
    }

    /// Add the `Authorization: Bearer` header when a token is present
    pub async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.current_token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
