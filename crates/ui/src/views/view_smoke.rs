use std::sync::Arc;

use api::{ApiError, ArtworkUpload, Backend, BackendStatus, InMemoryBackend};
use museum_core::model::{
    AnswerSet, Artwork, ArtworkId, ModelStats, Question, QuestionDraft, QuestionId,
};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_backend};

fn artwork(id: i64, title: &str, artist: &str) -> Artwork {
    Artwork {
        id: ArtworkId::new(id),
        title: title.to_string(),
        artist: artist.to_string(),
        year: 1889,
        image_path: format!("artwork_{id}.jpg"),
    }
}

fn question(id: i64, text: &str) -> Question {
    Question {
        id: QuestionId::new(id),
        text: text.to_string(),
        options: vec!["Landscape".to_string(), "Portrait".to_string()],
        correct_answer: None,
    }
}

fn seeded_backend() -> InMemoryBackend {
    InMemoryBackend::new()
        .with_artworks(vec![
            artwork(1, "The Starry Night", "Vincent van Gogh"),
            artwork(2, "Water Lilies", "Claude Monet"),
        ])
        .with_questions(vec![
            question(1, "What is the subject?"),
            question(2, "What is the style?"),
        ])
}

async fn render_settled(view: ViewKind, backend: InMemoryBackend) -> String {
    let mut harness = setup_view_harness(view, backend);
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_status_card() {
    let html = render_settled(ViewKind::Dashboard, seeded_backend()).await;
    assert!(html.contains("Dashboard"), "missing title in {html}");
    assert!(
        html.contains("2 artworks in the collection"),
        "missing artwork count in {html}"
    );
    assert!(
        html.contains("2 classification questions defined"),
        "missing question count in {html}"
    );
}

/// Answers `/status` but fails every other endpoint.
struct StatusOnlyBackend;

#[async_trait::async_trait]
impl Backend for StatusOnlyBackend {
    async fn status(&self) -> Result<BackendStatus, ApiError> {
        Ok(BackendStatus {
            status: "active".to_string(),
            message: None,
            artworks_count: 1,
            features_available: true,
            active_learner_initialized: false,
        })
    }

    async fn list_artworks(&self) -> Result<Vec<Artwork>, ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn get_artwork(&self, _id: ArtworkId) -> Result<Artwork, ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn next_artwork(&self) -> Result<Artwork, ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn classify(&self, _id: ArtworkId, _answers: &AnswerSet) -> Result<(), ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn model_stats(&self) -> Result<ModelStats, ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn create_question(&self, _draft: &QuestionDraft) -> Result<Question, ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn update_question(
        &self,
        _id: QuestionId,
        _draft: &QuestionDraft,
    ) -> Result<Question, ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn delete_question(&self, _id: QuestionId) -> Result<(), ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }

    async fn upload_artwork(&self, _upload: ArtworkUpload) -> Result<Artwork, ApiError> {
        Err(ApiError::Connection("offline".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_status_without_decorations() {
    let mut harness =
        setup_view_harness_with_backend(ViewKind::Dashboard, Arc::new(StatusOnlyBackend));
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("1 artworks in the collection"),
        "missing status card in {html}"
    );
    assert!(
        !html.contains("model accuracy"),
        "unexpected stats tiles in {html}"
    );
    assert!(
        !html.contains("questions defined"),
        "unexpected question count in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn learning_view_smoke_renders_artwork_and_questions() {
    let html = render_settled(ViewKind::Learning, seeded_backend()).await;
    assert!(
        html.contains("The Starry Night"),
        "missing artwork title in {html}"
    );
    assert!(
        html.contains("What is the subject?"),
        "missing question text in {html}"
    );
    assert!(html.contains("Landscape"), "missing option in {html}");
    assert!(html.contains("Classify"), "missing submit button in {html}");
    assert!(html.contains("Skip"), "missing skip button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learning_view_smoke_without_questions_points_to_questionnaire() {
    let backend = InMemoryBackend::new()
        .with_artworks(vec![artwork(1, "The Starry Night", "Vincent van Gogh")]);
    let html = render_settled(ViewKind::Learning, backend).await;
    assert!(
        html.contains("No questions defined"),
        "missing empty state in {html}"
    );
    assert!(
        html.contains("Go to Questionnaire"),
        "missing questionnaire link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn learning_view_smoke_with_empty_collection_shows_empty_state() {
    let backend =
        InMemoryBackend::new().with_questions(vec![question(1, "What is the subject?")]);
    let html = render_settled(ViewKind::Learning, backend).await;
    assert!(
        html.contains("No artwork available"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dataset_view_smoke_lists_artworks() {
    let html = render_settled(ViewKind::Dataset, seeded_backend()).await;
    assert!(
        html.contains("The Starry Night"),
        "missing first artwork in {html}"
    );
    assert!(
        html.contains("Water Lilies"),
        "missing second artwork in {html}"
    );
    assert!(
        html.contains("2 of 2 artworks"),
        "missing count label in {html}"
    );
    assert!(
        html.contains("http://localhost:8000/images/artwork_1.jpg"),
        "missing image url in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn questionnaire_view_smoke_lists_questions_and_form() {
    let html = render_settled(ViewKind::Questionnaire, seeded_backend()).await;
    assert!(
        html.contains("What is the style?"),
        "missing question in {html}"
    );
    assert!(
        html.contains("Landscape / Portrait"),
        "missing options label in {html}"
    );
    assert!(html.contains("Add question"), "missing form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_learning_curve() {
    let backend = seeded_backend().with_stats(ModelStats {
        accuracy: 0.75,
        classified_count: 3,
        total_count: 4,
        learning_curve: vec![0.25, 0.5, 0.75],
        ..ModelStats::default()
    });
    let html = render_settled(ViewKind::Progress, backend).await;
    assert!(html.contains("Model Progress"), "missing title in {html}");
    assert!(html.contains("75%"), "missing accuracy in {html}");
    assert!(html.contains("polyline"), "missing curve in {html}");
    assert!(html.contains("3 of 4"), "missing classified label in {html}");
}
