use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::QuestionId;
use super::question::Question;

/// The in-progress mapping from question to chosen option, scoped to the
/// currently displayed artwork.
///
/// Invariant: keys stay a subset of the loaded question set's ids. The
/// workflow enforces this by clearing the set whenever a new artwork is
/// loaded; `record` trusts its caller to pass a loaded question id because
/// the UI only presents declared questions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, String>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the chosen option for a question.
    pub fn record(&mut self, question_id: QuestionId, option: impl Into<String>) {
        self.answers.insert(question_id, option.into());
    }

    #[must_use]
    pub fn get(&self, question_id: QuestionId) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// True iff the answered key set equals the given questions' id set.
    #[must_use]
    pub fn is_complete_for(&self, questions: &[Question]) -> bool {
        self.answers.len() == questions.len()
            && questions
                .iter()
                .all(|question| self.answers.contains_key(&question.id))
    }

    /// Wire shape of the classify payload: question id rendered as a string
    /// key, matching the backend's `map<string, string>`.
    #[must_use]
    pub fn to_wire(&self) -> BTreeMap<String, String> {
        self.answers
            .iter()
            .map(|(id, option)| (id.to_string(), option.clone()))
            .collect()
    }
}
