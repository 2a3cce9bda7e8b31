use std::sync::Arc;

use api::{Backend, BackendStatus};
use museum_core::model::{Artwork, ArtworkId};

use crate::error::ArtworkServiceError;

/// Read-only artwork queries for the dataset and dashboard screens.
#[derive(Clone)]
pub struct ArtworkService {
    backend: Arc<dyn Backend>,
}

impl ArtworkService {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// # Errors
    ///
    /// Returns `ArtworkServiceError` when the backend is unreachable.
    pub async fn status(&self) -> Result<BackendStatus, ArtworkServiceError> {
        Ok(self.backend.status().await?)
    }

    /// # Errors
    ///
    /// Returns `ArtworkServiceError` for backend failures.
    pub async fn list_artworks(&self) -> Result<Vec<Artwork>, ArtworkServiceError> {
        Ok(self.backend.list_artworks().await?)
    }

    /// # Errors
    ///
    /// Returns `ArtworkServiceError` for backend failures, including an
    /// unknown id.
    pub async fn get_artwork(&self, id: ArtworkId) -> Result<Artwork, ArtworkServiceError> {
        Ok(self.backend.get_artwork(id).await?)
    }
}
