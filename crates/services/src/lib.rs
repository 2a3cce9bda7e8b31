#![forbid(unsafe_code)]

pub mod artwork_service;
pub mod classify;
pub mod error;
pub mod question_service;
pub mod stats_service;

pub use artwork_service::ArtworkService;
pub use classify::{AdvanceOutcome, ClassifyWorkflow, LoadOutcome, WorkflowPhase};
pub use error::{ArtworkServiceError, QuestionServiceError, StatsServiceError, WorkflowError};
pub use question_service::QuestionService;
pub use stats_service::StatsService;
