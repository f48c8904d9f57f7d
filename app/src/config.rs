//! Startup configuration: optional TOML file, then command-line overrides.

use std::fs;
use std::path::Path;

use amphibians_core::ClientConfig;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Defaults when `path` is `None`. A named file must exist and parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))
    }

    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(base_url) = base_url {
            self.client.base_url = base_url;
        }
        if timeout_secs.is_some() {
            self.client.timeout_secs = timeout_secs;
        }
        self
    }
}
