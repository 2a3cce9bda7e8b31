use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use museum_core::model::{AnswerSet, Artwork, ArtworkId, ModelStats, Question, QuestionDraft, QuestionId};

use crate::backend::{ApiError, Backend};
use crate::config::ApiConfig;
use crate::wire::{ArtworkUpload, BackendStatus, ClassifyRequest, StatusReply};

/// HTTP implementation of [`Backend`] against the FastAPI contract.
#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    config: ApiConfig,
}

impl RestBackend {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(%path, "backend request");
        let response = self.client.get(self.config.endpoint(path)).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        tracing::warn!(%status, "backend returned an error status");
        return Err(ApiError::Status(status));
    }
    Ok(response.json().await?)
}

#[async_trait]
impl Backend for RestBackend {
    async fn status(&self) -> Result<BackendStatus, ApiError> {
        self.get_json("/status").await
    }

    async fn list_artworks(&self) -> Result<Vec<Artwork>, ApiError> {
        self.get_json("/artworks").await
    }

    async fn get_artwork(&self, id: ArtworkId) -> Result<Artwork, ApiError> {
        self.get_json(&format!("/artworks/{id}")).await
    }

    async fn next_artwork(&self) -> Result<Artwork, ApiError> {
        self.get_json("/next-artwork").await
    }

    async fn classify(&self, artwork_id: ArtworkId, answers: &AnswerSet) -> Result<(), ApiError> {
        let payload = ClassifyRequest {
            artwork_id,
            classification: answers.to_wire(),
        };
        let response = self
            .client
            .post(self.config.endpoint("/artworks/classify"))
            .json(&payload)
            .send()
            .await?;
        let _: StatusReply = decode(response).await?;
        Ok(())
    }

    async fn model_stats(&self) -> Result<ModelStats, ApiError> {
        self.get_json("/model/stats").await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.get_json("/questions").await
    }

    async fn create_question(&self, draft: &QuestionDraft) -> Result<Question, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("/questions"))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_question(
        &self,
        id: QuestionId,
        draft: &QuestionDraft,
    ) -> Result<Question, ApiError> {
        let response = self
            .client
            .put(self.config.endpoint(&format!("/questions/{id}")))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.config.endpoint(&format!("/questions/{id}")))
            .send()
            .await?;
        let _: StatusReply = decode(response).await?;
        Ok(())
    }

    async fn upload_artwork(&self, upload: ArtworkUpload) -> Result<Artwork, ApiError> {
        let form = Form::new()
            .text("title", upload.title)
            .text("artist", upload.artist)
            .text("year", upload.year.to_string())
            .part("image", Part::bytes(upload.image).file_name(upload.file_name));
        let response = self
            .client
            .post(self.config.endpoint("/artworks/upload"))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }
}
