use std::sync::Arc;

use api::Backend;
use museum_core::model::ModelStats;

use crate::error::StatsServiceError;

/// Fetches the read-only model statistics snapshot.
#[derive(Clone)]
pub struct StatsService {
    backend: Arc<dyn Backend>,
}

impl StatsService {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// # Errors
    ///
    /// Returns `StatsServiceError` for backend failures.
    pub async fn model_stats(&self) -> Result<ModelStats, StatsServiceError> {
        Ok(self.backend.model_stats().await?)
    }
}
