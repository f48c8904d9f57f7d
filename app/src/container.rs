//! Composition root: builds the one repository the view model is given.

use std::sync::Arc;

use amphibians_core::{AmphibiansApi, AmphibiansRepository, ClientConfig, NetworkAmphibiansRepository};
use anyhow::{Context, Result};

pub struct AppContainer {
    pub repository: Arc<dyn AmphibiansRepository>,
}

impl AppContainer {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api = AmphibiansApi::new(config).context("invalid client configuration")?;
        tracing::debug!(base_url = api.base_url(), "amphibians client ready");
        Ok(Self {
            repository: Arc::new(NetworkAmphibiansRepository::new(Arc::new(api))),
        })
    }
}
