//! Credential sources for the calendar provider
//!
//! The token artifact is produced and refreshed elsewhere; here it is only
//! read. Its absence is always `AuthMissing`, never a provider error.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use slotguard_core::CredentialProvider;
use slotguard_domain::{Result, SlotGuardError};
use tracing::debug;

/// Authorized-user token file, as written by the usual OAuth helpers.
#[derive(Debug, Deserialize)]
struct TokenFile {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
}

/// Reads the bearer token from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct TokenFileCredentials {
    path: PathBuf,
}

impl TokenFileCredentials {
    /// Credentials backed by the token file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialProvider for TokenFileCredentials {
    async fn access_token(&self) -> Result<String> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SlotGuardError::AuthMissing(format!(
                    "token file not found at {}",
                    self.path.display()
                )));
            }
            Err(e) => {
                return Err(SlotGuardError::AuthMissing(format!(
                    "token file at {} is unreadable: {e}",
                    self.path.display()
                )));
            }
        };

        let parsed: TokenFile = serde_json::from_str(&contents).map_err(|e| {
            SlotGuardError::AuthMissing(format!(
                "token file at {} is not valid JSON: {e}",
                self.path.display()
            ))
        })?;

        let token = parsed
            .token
            .or(parsed.access_token)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                SlotGuardError::AuthMissing(format!(
                    "token file at {} holds no access token",
                    self.path.display()
                ))
            })?;

        debug!(path = %self.path.display(), "loaded calendar access token");
        Ok(token)
    }
}

/// Fixed token, for tests and for deployments that inject it directly.
#[derive(Clone)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials").field("token", &"<redacted>").finish()
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn access_token(&self) -> Result<String> {
        if self.token.trim().is_empty() {
            return Err(SlotGuardError::AuthMissing("no access token configured".into()));
        }
        Ok(self.token.clone())
    }
}
