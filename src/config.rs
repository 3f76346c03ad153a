// SPDX-License-Identifier: MIT

//! Harness configuration.
//!
//! Five recognized keys cover the service endpoint and OAuth client
//! credentials. Values may come from a TOML file or be built in code; each
//! key is overridable by an environment variable of the same name at process
//! start, so CI can point the suite at a different environment without
//! touching the file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// `MEDIA_SERVICE_URI` — REST endpoint of the media service
pub const SERVICE_URI: &str = "MEDIA_SERVICE_URI";
/// `MEDIA_OAUTH_URI` — OAuth token endpoint
pub const OAUTH_URI: &str = "MEDIA_OAUTH_URI";
/// `MEDIA_OAUTH_CLIENT_ID` — OAuth client id
pub const OAUTH_CLIENT_ID: &str = "MEDIA_OAUTH_CLIENT_ID";
/// `MEDIA_OAUTH_CLIENT_SECRET` — OAuth client secret
pub const OAUTH_CLIENT_SECRET: &str = "MEDIA_OAUTH_CLIENT_SECRET";
/// `MEDIA_OAUTH_SCOPE` — OAuth scope
pub const OAUTH_SCOPE: &str = "MEDIA_OAUTH_SCOPE";

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Connection settings handed to the resource client
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// REST endpoint of the media service
    #[serde(default)]
    pub service_uri: String,

    /// OAuth token endpoint
    #[serde(default)]
    pub oauth_uri: String,

    /// OAuth client id
    #[serde(default)]
    pub oauth_client_id: String,

    /// OAuth client secret
    #[serde(default)]
    pub oauth_client_secret: String,

    /// OAuth scope
    #[serde(default)]
    pub oauth_scope: String,
}

impl HarnessConfig {
    /// Load from a TOML file, then apply env overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config.overridden_from_env())
    }

    /// Configuration built purely from environment variables
    pub fn from_env() -> Self {
        Self::default().overridden_from_env()
    }

    /// Replace each field whose environment variable is set
    pub fn overridden_from_env(mut self) -> Self {
        override_with_env(&mut self.service_uri, SERVICE_URI);
        override_with_env(&mut self.oauth_uri, OAUTH_URI);
        override_with_env(&mut self.oauth_client_id, OAUTH_CLIENT_ID);
        override_with_env(&mut self.oauth_client_secret, OAUTH_CLIENT_SECRET);
        override_with_env(&mut self.oauth_scope, OAUTH_SCOPE);
        self
    }
}

// Manual Debug so the client secret never lands in logs.
impl std::fmt::Debug for HarnessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarnessConfig")
            .field("service_uri", &self.service_uri)
            .field("oauth_uri", &self.oauth_uri)
            .field("oauth_client_id", &self.oauth_client_id)
            .field("oauth_client_secret", &"<redacted>")
            .field("oauth_scope", &self.oauth_scope)
            .finish()
    }
}

fn override_with_env(field: &mut String, name: &str) {
    if let Ok(value) = std::env::var(name) {
        *field = value;
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
