//! Shared error types for the services crate.

use thiserror::Error;

use api::ApiError;
use museum_core::model::QuestionError;

/// Errors emitted by `ClassifyWorkflow`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WorkflowError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `QuestionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionServiceError {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ArtworkService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArtworkServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `StatsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatsServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
