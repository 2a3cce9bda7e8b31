use std::sync::Arc;

use api::{ApiError, Backend};
use museum_core::model::{Artwork, ModelStats, QuestionId};
use services::{AdvanceOutcome, ClassifyWorkflow, WorkflowError};

use crate::views::ViewError;

/// User actions the learning view can dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LearningIntent {
    Answer(QuestionId, String),
    Submit,
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LearningOutcome {
    Advanced,
    Skipped,
    Incomplete,
    Busy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<OptionVm>,
}

/// View-model around the classification workflow.
pub struct LearningVm {
    workflow: ClassifyWorkflow,
}

impl LearningVm {
    /// Start a classification session.
    ///
    /// An exhausted or empty collection is not an error here: the view
    /// renders an empty state for a session without an artwork.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for connectivity failures.
    pub async fn start(backend: Arc<dyn Backend>) -> Result<Self, ViewError> {
        let mut workflow = ClassifyWorkflow::new(backend);
        match workflow.start().await {
            Ok(()) | Err(WorkflowError::Api(ApiError::NotFound)) => Ok(Self { workflow }),
            Err(_) => Err(ViewError::Unknown),
        }
    }

    #[must_use]
    pub fn has_questions(&self) -> bool {
        !self.workflow.questions().is_empty()
    }

    #[must_use]
    pub fn artwork(&self) -> Option<&Artwork> {
        self.workflow.artwork()
    }

    #[must_use]
    pub fn stats(&self) -> Option<&ModelStats> {
        self.workflow.stats()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.workflow.is_complete()
    }

    pub fn record_answer(&mut self, question_id: QuestionId, option: String) {
        self.workflow.record_answer(question_id, option);
    }

    /// Question cards with each option's selected flag resolved.
    #[must_use]
    pub fn question_cards(&self) -> Vec<QuestionCardVm> {
        self.workflow
            .questions()
            .iter()
            .map(|question| {
                let chosen = self.workflow.answer_for(question.id);
                QuestionCardVm {
                    id: question.id,
                    text: question.text.clone(),
                    options: question
                        .options
                        .iter()
                        .map(|option| OptionVm {
                            label: option.clone(),
                            selected: chosen == Some(option.as_str()),
                        })
                        .collect(),
                }
            })
            .collect()
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures; the workflow keeps
    /// its prior state.
    pub async fn submit(&mut self) -> Result<LearningOutcome, ViewError> {
        match self.workflow.submit_and_advance().await {
            Ok(AdvanceOutcome::Submitted) => Ok(LearningOutcome::Advanced),
            Ok(AdvanceOutcome::Incomplete | AdvanceOutcome::NoArtwork) => {
                Ok(LearningOutcome::Incomplete)
            }
            Ok(AdvanceOutcome::Busy) => Ok(LearningOutcome::Busy),
            Err(err) => Err(map_workflow_error(&err)),
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoArtwork` when the collection is exhausted and
    /// `ViewError::Unknown` for other failures; the current artwork stays.
    pub async fn skip(&mut self) -> Result<LearningOutcome, ViewError> {
        match self.workflow.skip().await {
            Ok(services::LoadOutcome::Loaded) => Ok(LearningOutcome::Skipped),
            Ok(services::LoadOutcome::Busy) => Ok(LearningOutcome::Busy),
            Err(err) => Err(map_workflow_error(&err)),
        }
    }
}

fn map_workflow_error(err: &WorkflowError) -> ViewError {
    match err {
        WorkflowError::Api(ApiError::NotFound) => ViewError::NoArtwork,
        _ => ViewError::Unknown,
    }
}
