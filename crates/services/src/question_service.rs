use std::sync::Arc;

use api::Backend;
use museum_core::model::{Question, QuestionDraft, QuestionId};

use crate::error::QuestionServiceError;

/// Questionnaire CRUD over the backend.
#[derive(Clone)]
pub struct QuestionService {
    backend: Arc<dyn Backend>,
}

impl QuestionService {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// # Errors
    ///
    /// Returns `QuestionServiceError` for backend failures.
    pub async fn list_questions(&self) -> Result<Vec<Question>, QuestionServiceError> {
        Ok(self.backend.list_questions().await?)
    }

    /// Validate and store a new question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Question` for an invalid draft and
    /// `QuestionServiceError::Api` for backend failures.
    pub async fn create_question(
        &self,
        text: String,
        options: Vec<String>,
        correct_answer: Option<String>,
    ) -> Result<Question, QuestionServiceError> {
        let draft = QuestionDraft::new(text, options, correct_answer)?;
        Ok(self.backend.create_question(&draft).await?)
    }

    /// Validate and replace an existing question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Question` for an invalid draft and
    /// `QuestionServiceError::Api` for backend failures, including an
    /// unknown id.
    pub async fn update_question(
        &self,
        id: QuestionId,
        text: String,
        options: Vec<String>,
        correct_answer: Option<String>,
    ) -> Result<Question, QuestionServiceError> {
        let draft = QuestionDraft::new(text, options, correct_answer)?;
        Ok(self.backend.update_question(id, &draft).await?)
    }

    /// # Errors
    ///
    /// Returns `QuestionServiceError` for backend failures, including an
    /// unknown id.
    pub async fn delete_question(&self, id: QuestionId) -> Result<(), QuestionServiceError> {
        Ok(self.backend.delete_question(id).await?)
    }
}
