//! Transport-agnostic data source for amphibians.
//!
//! `AmphibiansViewModel` depends on the `AmphibiansRepository` trait rather
//! than on `AmphibiansApi`, so tests can substitute an in-memory source.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::AmphibiansApi;
use crate::error::ApiError;
use crate::types::Amphibian;

#[async_trait]
pub trait AmphibiansRepository: Send + Sync {
    async fn get_amphibians(&self) -> Result<Vec<Amphibian>, ApiError>;
}

/// Repository backed by the HTTP API. Forwards results and failures as-is.
#[derive(Debug, Clone)]
pub struct NetworkAmphibiansRepository {
    api: Arc<AmphibiansApi>,
}

impl NetworkAmphibiansRepository {
    pub fn new(api: Arc<AmphibiansApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AmphibiansRepository for NetworkAmphibiansRepository {
    async fn get_amphibians(&self) -> Result<Vec<Amphibian>, ApiError> {
        self.api.get_amphibians().await
    }
}
