use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use museum_core::model::{AnswerSet, Artwork, ArtworkId, ModelStats, Question, QuestionDraft, QuestionId};

use crate::backend::{ApiError, Backend};
use crate::wire::{ArtworkUpload, BackendStatus};

#[derive(Default)]
struct State {
    artworks: Vec<Artwork>,
    questions: Vec<Question>,
    next_question_id: i64,
    classifications: BTreeMap<ArtworkId, BTreeMap<String, String>>,
    stats: ModelStats,
}

/// In-memory stand-in for the backend, used by service and view tests.
///
/// `next_artwork` walks the unclassified artworks in insertion order, which
/// makes test expectations deterministic where the real backend's active
/// learner is not.
#[derive(Clone)]
pub struct InMemoryBackend {
    state: Arc<Mutex<State>>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                next_question_id: 1,
                ..State::default()
            })),
        }
    }

    #[must_use]
    pub fn with_artworks(self, artworks: Vec<Artwork>) -> Self {
        {
            let mut state = self.state.lock().expect("backend state");
            state.stats.total_count = artworks.len() as u64;
            state.artworks = artworks;
        }
        self
    }

    #[must_use]
    pub fn with_questions(self, questions: Vec<Question>) -> Self {
        {
            let mut state = self.state.lock().expect("backend state");
            state.next_question_id = questions
                .iter()
                .map(|question| question.id.value())
                .max()
                .unwrap_or(0)
                + 1;
            state.questions = questions;
        }
        self
    }

    #[must_use]
    pub fn with_stats(self, stats: ModelStats) -> Self {
        self.state.lock().expect("backend state").stats = stats;
        self
    }

    /// Classification submitted for an artwork, if any.
    #[must_use]
    pub fn classification(&self, id: ArtworkId) -> Option<BTreeMap<String, String>> {
        self.state
            .lock()
            .expect("backend state")
            .classifications
            .get(&id)
            .cloned()
    }

    /// How many classify calls the backend has accepted.
    #[must_use]
    pub fn classified_count(&self) -> usize {
        self.state
            .lock()
            .expect("backend state")
            .classifications
            .len()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>, ApiError> {
        self.state
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn status(&self) -> Result<BackendStatus, ApiError> {
        let state = self.lock()?;
        Ok(BackendStatus {
            status: "active".to_string(),
            message: None,
            artworks_count: state.artworks.len() as u64,
            features_available: true,
            active_learner_initialized: true,
        })
    }

    async fn list_artworks(&self) -> Result<Vec<Artwork>, ApiError> {
        Ok(self.lock()?.artworks.clone())
    }

    async fn get_artwork(&self, id: ArtworkId) -> Result<Artwork, ApiError> {
        self.lock()?
            .artworks
            .iter()
            .find(|artwork| artwork.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn next_artwork(&self) -> Result<Artwork, ApiError> {
        let state = self.lock()?;
        state
            .artworks
            .iter()
            .find(|artwork| !state.classifications.contains_key(&artwork.id))
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn classify(&self, artwork_id: ArtworkId, answers: &AnswerSet) -> Result<(), ApiError> {
        let mut state = self.lock()?;
        if !state.artworks.iter().any(|artwork| artwork.id == artwork_id) {
            return Err(ApiError::NotFound);
        }
        state.classifications.insert(artwork_id, answers.to_wire());
        state.stats.classified_count = state.classifications.len() as u64;
        Ok(())
    }

    async fn model_stats(&self) -> Result<ModelStats, ApiError> {
        Ok(self.lock()?.stats.clone())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        Ok(self.lock()?.questions.clone())
    }

    async fn create_question(&self, draft: &QuestionDraft) -> Result<Question, ApiError> {
        let mut state = self.lock()?;
        let id = QuestionId::new(state.next_question_id);
        state.next_question_id += 1;
        let question = draft.clone().into_question(id);
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn update_question(
        &self,
        id: QuestionId,
        draft: &QuestionDraft,
    ) -> Result<Question, ApiError> {
        let mut state = self.lock()?;
        let slot = state
            .questions
            .iter_mut()
            .find(|question| question.id == id)
            .ok_or(ApiError::NotFound)?;
        *slot = draft.clone().into_question(id);
        Ok(slot.clone())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        let mut state = self.lock()?;
        let before = state.questions.len();
        state.questions.retain(|question| question.id != id);
        if state.questions.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    async fn upload_artwork(&self, upload: ArtworkUpload) -> Result<Artwork, ApiError> {
        let mut state = self.lock()?;
        let id = ArtworkId::new(
            state
                .artworks
                .iter()
                .map(|artwork| artwork.id.value())
                .max()
                .unwrap_or(0)
                + 1,
        );
        let artwork = Artwork {
            id,
            title: upload.title,
            artist: upload.artist,
            year: upload.year,
            image_path: upload.file_name,
        };
        state.artworks.push(artwork.clone());
        state.stats.total_count = state.artworks.len() as u64;
        Ok(artwork)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: i64, title: &str) -> Artwork {
        Artwork {
            id: ArtworkId::new(id),
            title: title.to_string(),
            artist: "Unknown".to_string(),
            year: 1900,
            image_path: format!("{id}.jpg"),
        }
    }

    #[tokio::test]
    async fn next_artwork_skips_classified_ones() {
        let backend = InMemoryBackend::new()
            .with_artworks(vec![artwork(1, "First"), artwork(2, "Second")]);

        let first = backend.next_artwork().await.unwrap();
        assert_eq!(first.id, ArtworkId::new(1));

        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new(1), "A");
        backend.classify(first.id, &answers).await.unwrap();

        let second = backend.next_artwork().await.unwrap();
        assert_eq!(second.id, ArtworkId::new(2));
    }

    #[tokio::test]
    async fn question_crud_round_trip() {
        let backend = InMemoryBackend::new();
        let draft = QuestionDraft::new(
            "Subject?",
            vec!["Landscape".to_string(), "Portrait".to_string()],
            None,
        )
        .unwrap();
        let created = backend.create_question(&draft).await.unwrap();

        let updated_draft = QuestionDraft::new(
            "Subject of the artwork?",
            vec!["Landscape".to_string(), "Portrait".to_string()],
            None,
        )
        .unwrap();
        let updated = backend
            .update_question(created.id, &updated_draft)
            .await
            .unwrap();
        assert_eq!(updated.text, "Subject of the artwork?");

        backend.delete_question(created.id).await.unwrap();
        assert!(backend.list_questions().await.unwrap().is_empty());
        assert!(matches!(
            backend.delete_question(created.id).await,
            Err(ApiError::NotFound)
        ));
    }

    #[tokio::test]
    async fn upload_assigns_fresh_id_and_grows_total() {
        let backend = InMemoryBackend::new().with_artworks(vec![artwork(4, "Existing")]);
        let uploaded = backend
            .upload_artwork(ArtworkUpload {
                title: "New Piece".to_string(),
                artist: "Someone".to_string(),
                year: 2001,
                file_name: "new_piece.jpg".to_string(),
                image: vec![0xFF, 0xD8],
            })
            .await
            .unwrap();
        assert_eq!(uploaded.id, ArtworkId::new(5));
        let stats = backend.model_stats().await.unwrap();
        assert_eq!(stats.total_count, 2);
    }
}
