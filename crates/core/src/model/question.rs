use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::QuestionId;

/// A single classification prompt with a fixed set of selectable options.
///
/// Loaded once per session; the classification flow never mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text must not be blank")]
    BlankText,
    #[error("a question needs at least two options")]
    TooFewOptions,
    #[error("option {0} must not be blank")]
    BlankOption(usize),
}

/// A question awaiting an id from the backend.
///
/// Construction validates the shape the questionnaire editor allows: a
/// non-blank prompt and at least two non-blank options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    text: String,
    options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correct_answer: Option<String>,
}

impl QuestionDraft {
    /// Validates and builds a draft.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for blank text, fewer than two options, or a
    /// blank option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: Option<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::BlankText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions);
        }
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::BlankOption(index + 1));
        }
        Ok(Self {
            text,
            options,
            correct_answer,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<&str> {
        self.correct_answer.as_deref()
    }

    /// Attach the id assigned by the backend.
    #[must_use]
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            text: self.text,
            options: self.options,
            correct_answer: self.correct_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn draft_accepts_two_options() {
        let draft = QuestionDraft::new(
            "Is this artwork a landscape or portrait?",
            options(&["Landscape", "Portrait"]),
            None,
        )
        .unwrap();
        assert_eq!(draft.options().len(), 2);
    }

    #[test]
    fn draft_rejects_blank_text() {
        let err = QuestionDraft::new("   ", options(&["A", "B"]), None).unwrap_err();
        assert_eq!(err, QuestionError::BlankText);
    }

    #[test]
    fn draft_rejects_single_option() {
        let err = QuestionDraft::new("Period?", options(&["Modern"]), None).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions);
    }

    #[test]
    fn draft_rejects_blank_option() {
        let err = QuestionDraft::new("Period?", options(&["Modern", " "]), None).unwrap_err();
        assert_eq!(err, QuestionError::BlankOption(2));
    }

    #[test]
    fn into_question_keeps_fields() {
        let draft = QuestionDraft::new(
            "What period does this artwork belong to?",
            options(&["Renaissance", "Baroque", "Modern"]),
            Some("Modern".to_string()),
        )
        .unwrap();
        let question = draft.into_question(QuestionId::new(7));
        assert_eq!(question.id, QuestionId::new(7));
        assert_eq!(question.options.len(), 3);
        assert_eq!(question.correct_answer.as_deref(), Some("Modern"));
    }
}
