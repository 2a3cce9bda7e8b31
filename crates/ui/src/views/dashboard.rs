use api::BackendStatus;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::{map_model_stats, StatsVm};

#[derive(Clone, PartialEq)]
struct DashboardData {
    status: BackendStatus,
    stats: Option<StatsVm>,
    question_count: Option<usize>,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let artwork_service = ctx.artwork_service();
    let stats_service = ctx.stats_service();
    let question_service = ctx.question_service();

    let mut resource = use_resource(move || {
        let artwork_service = artwork_service.clone();
        let stats_service = stats_service.clone();
        let question_service = question_service.clone();

        async move {
            let status = artwork_service
                .status()
                .await
                .map_err(|_| ViewError::Unknown)?;
            // Stats and questions are decoration here; the status card alone
            // is enough to render the dashboard.
            let stats = match stats_service.model_stats().await {
                Ok(stats) => Some(map_model_stats(&stats)),
                Err(err) => {
                    tracing::warn!(error = %err, "stats unavailable for dashboard");
                    None
                }
            };
            let question_count = match question_service.list_questions().await {
                Ok(questions) => Some(questions.len()),
                Err(err) => {
                    tracing::warn!(error = %err, "question list unavailable for dashboard");
                    None
                }
            };
            Ok(DashboardData {
                status,
                stats,
                question_count,
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Dashboard" }
                p { class: "view-subtitle",
                    "Overview of the collection and the classification backend."
                }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
                ViewState::Ready(data) => {
                    let pill_class = if data.status.is_active() {
                        "status-pill status-pill--active"
                    } else {
                        "status-pill status-pill--inactive"
                    };
                    let learner_label = if data.status.active_learner_initialized {
                        "initialized"
                    } else {
                        "not initialized"
                    };
                    let features_label = if data.status.features_available {
                        "available"
                    } else {
                        "not extracted yet"
                    };
                    rsx! {
                        div { class: "status-card",
                            div { class: "status-card-top",
                                h3 { "Backend" }
                                span { class: "{pill_class}", "{data.status.status}" }
                            }
                            ul { class: "status-facts",
                                li { "{data.status.artworks_count} artworks in the collection" }
                                li { "Image features: {features_label}" }
                                li { "Active learner: {learner_label}" }
                                if let Some(count) = data.question_count {
                                    li { "{count} classification questions defined" }
                                }
                            }
                            if let Some(message) = data.status.message.as_ref() {
                                p { class: "status-message", "{message}" }
                            }
                        }
                        if let Some(stats) = data.stats.as_ref() {
                            div { class: "dashboard-stats",
                                div { class: "stat-tile",
                                    span { class: "stat-value", "{stats.classified_label}" }
                                    span { class: "stat-label", "classified" }
                                }
                                div { class: "stat-tile",
                                    span { class: "stat-value", "{stats.accuracy_label}" }
                                    span { class: "stat-label", "model accuracy" }
                                }
                                div { class: "stat-tile",
                                    span { class: "stat-value", "{stats.progress_percent}%" }
                                    span { class: "stat-label", "progress" }
                                }
                            }
                        }
                        div { class: "dashboard-links",
                            Link { class: "btn btn-primary", to: Route::Learning {}, "Start learning" }
                            Link { class: "btn btn-secondary", to: Route::Questionnaire {}, "Manage questions" }
                            Link { class: "btn btn-secondary", to: Route::Dataset {}, "Browse dataset" }
                            Link { class: "btn btn-secondary", to: Route::Progress {}, "Model progress" }
                        }
                    }
                }
            }
        }
    }
}
