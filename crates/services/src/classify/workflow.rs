use std::sync::Arc;

use api::Backend;
use museum_core::model::{AnswerSet, Artwork, ModelStats, Question, QuestionId};

use crate::error::WorkflowError;

/// What the workflow is currently doing.
///
/// A backend call is only dispatched from `Idle`, so duplicate concurrent
/// submissions for the same artwork cannot be expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkflowPhase {
    #[default]
    Idle,
    Loading,
    Submitting,
}

/// Result of a `load_next` / `skip` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Busy,
}

/// Result of a `submit_and_advance` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Submitted,
    Incomplete,
    NoArtwork,
    Busy,
}

/// Owns the classification-submission session: the loaded question set, the
/// artwork on display, the in-progress answer set and the latest stats
/// snapshot.
///
/// Every operation leaves the workflow back in `Idle`, success or failure,
/// and no failure is fatal to the session.
pub struct ClassifyWorkflow {
    backend: Arc<dyn Backend>,
    questions: Vec<Question>,
    artwork: Option<Artwork>,
    answers: AnswerSet,
    stats: Option<ModelStats>,
    phase: WorkflowPhase,
}

impl ClassifyWorkflow {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            questions: Vec::new(),
            artwork: None,
            answers: AnswerSet::new(),
            stats: None,
            phase: WorkflowPhase::Idle,
        }
    }

    /// Fetch the question set, a stats snapshot and the first artwork.
    ///
    /// The stats fetch is best-effort; a missing snapshot only blanks the
    /// progress footer.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError` when the question list or the first artwork
    /// cannot be fetched. Loaded questions are kept either way.
    pub async fn start(&mut self) -> Result<(), WorkflowError> {
        self.questions = self.backend.list_questions().await?;
        if let Err(err) = self.refresh_stats().await {
            tracing::warn!(error = %err, "stats snapshot unavailable at session start");
        }
        self.load_next().await?;
        Ok(())
    }

    /// Request the next artwork from the backend.
    ///
    /// On success the current artwork is replaced and the answer set cleared,
    /// whether or not the previous artwork was fully classified. On failure
    /// prior state is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError` when the fetch fails; there is no retry.
    pub async fn load_next(&mut self) -> Result<LoadOutcome, WorkflowError> {
        if self.phase != WorkflowPhase::Idle {
            return Ok(LoadOutcome::Busy);
        }
        self.phase = WorkflowPhase::Loading;
        let fetched = self.backend.next_artwork().await;
        self.phase = WorkflowPhase::Idle;
        match fetched {
            Ok(artwork) => {
                self.artwork = Some(artwork);
                self.answers.clear();
                Ok(LoadOutcome::Loaded)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load next artwork");
                Err(err.into())
            }
        }
    }

    /// Insert or overwrite the chosen option for a question.
    ///
    /// The option is trusted to belong to the question's declared set; the
    /// UI only presents declared options. Ignored while a submission is in
    /// flight.
    pub fn record_answer(&mut self, question_id: QuestionId, option: impl Into<String>) {
        if self.phase == WorkflowPhase::Submitting {
            return;
        }
        self.answers.record(question_id, option);
    }

    /// True iff every loaded question has an answer recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.is_complete_for(&self.questions)
    }

    /// Submit the completed classification, refresh statistics and advance
    /// to the next artwork.
    ///
    /// A no-op without any network call when the answer set is incomplete,
    /// no artwork is loaded, or another request is in flight.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError` when the submission is rejected (artwork and
    /// answers are retained) or when the follow-up artwork fetch fails after
    /// an accepted submission.
    pub async fn submit_and_advance(&mut self) -> Result<AdvanceOutcome, WorkflowError> {
        if self.phase != WorkflowPhase::Idle {
            return Ok(AdvanceOutcome::Busy);
        }
        let Some(artwork_id) = self.artwork.as_ref().map(|artwork| artwork.id) else {
            return Ok(AdvanceOutcome::NoArtwork);
        };
        if !self.is_complete() {
            return Ok(AdvanceOutcome::Incomplete);
        }

        self.phase = WorkflowPhase::Submitting;
        if let Err(err) = self.backend.classify(artwork_id, &self.answers).await {
            self.phase = WorkflowPhase::Idle;
            tracing::warn!(%artwork_id, error = %err, "classification rejected");
            return Err(err.into());
        }

        if let Err(err) = self.refresh_stats().await {
            tracing::warn!(error = %err, "stats refresh failed after classification");
        }

        let fetched = self.backend.next_artwork().await;
        self.phase = WorkflowPhase::Idle;
        match fetched {
            Ok(next) => {
                self.artwork = Some(next);
                self.answers.clear();
                Ok(AdvanceOutcome::Submitted)
            }
            Err(err) => {
                // The classification was accepted; only the advance failed.
                // Keep the submitted artwork on screen and let the user retry.
                tracing::warn!(error = %err, "failed to advance after classification");
                Err(err.into())
            }
        }
    }

    /// Discard the current artwork and answers without submitting.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError` when the next artwork cannot be fetched.
    pub async fn skip(&mut self) -> Result<LoadOutcome, WorkflowError> {
        self.load_next().await
    }

    /// Re-fetch the model statistics snapshot.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError` when the fetch fails; the previous snapshot
    /// is kept.
    pub async fn refresh_stats(&mut self) -> Result<(), WorkflowError> {
        let stats = self.backend.model_stats().await?;
        self.stats = Some(stats);
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != WorkflowPhase::Idle
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn artwork(&self) -> Option<&Artwork> {
        self.artwork.as_ref()
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, question_id: QuestionId) -> Option<&str> {
        self.answers.get(question_id)
    }

    #[must_use]
    pub fn stats(&self) -> Option<&ModelStats> {
        self.stats.as_ref()
    }
}
