use async_trait::async_trait;
use thiserror::Error;

use museum_core::model::{AnswerSet, Artwork, ArtworkId, ModelStats, Question, QuestionDraft, QuestionId};

use crate::wire::{ArtworkUpload, BackendStatus};

/// Errors surfaced by backend adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("connection error: {0}")]
    Connection(String),
}

/// The REST contract consumed by the client, one method per endpoint.
///
/// No retry, caching, or concurrency logic lives here; callers decide how a
/// failure is surfaced.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /status`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the backend is unreachable or replies with a
    /// non-success status.
    async fn status(&self) -> Result<BackendStatus, ApiError>;

    /// `GET /artworks`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for connectivity or decode failures.
    async fn list_artworks(&self) -> Result<Vec<Artwork>, ApiError>;

    /// `GET /artworks/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id.
    async fn get_artwork(&self, id: ArtworkId) -> Result<Artwork, ApiError>;

    /// `GET /next-artwork` — the backend picks which artwork to show next.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for connectivity failures or when no artwork is
    /// available.
    async fn next_artwork(&self) -> Result<Artwork, ApiError>;

    /// `POST /artworks/classify`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the backend rejects the classification.
    async fn classify(&self, artwork_id: ArtworkId, answers: &AnswerSet) -> Result<(), ApiError>;

    /// `GET /model/stats`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for connectivity or decode failures.
    async fn model_stats(&self) -> Result<ModelStats, ApiError>;

    /// `GET /questions`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for connectivity or decode failures.
    async fn list_questions(&self) -> Result<Vec<Question>, ApiError>;

    /// `POST /questions`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the question cannot be stored.
    async fn create_question(&self, draft: &QuestionDraft) -> Result<Question, ApiError>;

    /// `PUT /questions/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id.
    async fn update_question(
        &self,
        id: QuestionId,
        draft: &QuestionDraft,
    ) -> Result<Question, ApiError>;

    /// `DELETE /questions/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id.
    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError>;

    /// `POST /artworks/upload` (multipart)
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the upload is rejected.
    async fn upload_artwork(&self, upload: ArtworkUpload) -> Result<Artwork, ApiError>;
}
