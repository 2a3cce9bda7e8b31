use std::sync::Arc;

use api::{ApiConfig, Backend, InMemoryBackend};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{ArtworkService, QuestionService, StatsService};

use crate::context::{UiApp, build_app_context};
use crate::views::{DashboardView, DatasetView, LearningView, ProgressView, QuestionnaireView};

#[derive(Clone)]
struct TestApp {
    backend: Arc<dyn Backend>,
    artwork_service: Arc<ArtworkService>,
    question_service: Arc<QuestionService>,
    stats_service: Arc<StatsService>,
    api_config: ApiConfig,
}

impl UiApp for TestApp {
    fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    fn artwork_service(&self) -> Arc<ArtworkService> {
        Arc::clone(&self.artwork_service)
    }

    fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    fn stats_service(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats_service)
    }

    fn api_config(&self) -> ApiConfig {
        self.api_config.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Learning,
    Questionnaire,
    Dataset,
    Progress,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Learning => rsx! { LearningView {} },
        ViewKind::Questionnaire => rsx! { QuestionnaireView {} },
        ViewKind::Dataset => rsx! { DatasetView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, backend: InMemoryBackend) -> ViewHarness {
    setup_view_harness_with_backend(view, Arc::new(backend))
}

pub fn setup_view_harness_with_backend(view: ViewKind, backend: Arc<dyn Backend>) -> ViewHarness {
    let api_config = ApiConfig::new("http://localhost:8000/api", "http://localhost:8000")
        .expect("test config");
    let app = Arc::new(TestApp {
        backend: Arc::clone(&backend),
        artwork_service: Arc::new(ArtworkService::new(Arc::clone(&backend))),
        question_service: Arc::new(QuestionService::new(Arc::clone(&backend))),
        stats_service: Arc::new(StatsService::new(backend)),
        api_config,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom }
}
