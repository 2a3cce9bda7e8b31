use std::sync::Arc;

use api::{ApiConfig, Backend};
use services::{ArtworkService, QuestionService, StatsService};

/// What the composition root (e.g. `crates/app`) must provide to the views.
pub trait UiApp: Send + Sync {
    fn backend(&self) -> Arc<dyn Backend>;
    fn artwork_service(&self) -> Arc<ArtworkService>;
    fn question_service(&self) -> Arc<QuestionService>;
    fn stats_service(&self) -> Arc<StatsService>;
    fn api_config(&self) -> ApiConfig;
}

#[derive(Clone)]
pub struct AppContext {
    backend: Arc<dyn Backend>,
    artwork_service: Arc<ArtworkService>,
    question_service: Arc<QuestionService>,
    stats_service: Arc<StatsService>,
    api_config: ApiConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            backend: app.backend(),
            artwork_service: app.artwork_service(),
            question_service: app.question_service(),
            stats_service: app.stats_service(),
            api_config: app.api_config(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    #[must_use]
    pub fn artwork_service(&self) -> Arc<ArtworkService> {
        Arc::clone(&self.artwork_service)
    }

    #[must_use]
    pub fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    #[must_use]
    pub fn stats_service(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats_service)
    }

    #[must_use]
    pub fn api_config(&self) -> &ApiConfig {
        &self.api_config
    }

    /// URL for an artwork's stored relative image path.
    #[must_use]
    pub fn image_url(&self, image_path: &str) -> String {
        self.api_config.image_url(image_path)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
