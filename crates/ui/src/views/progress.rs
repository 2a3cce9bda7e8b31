use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::map_model_stats;

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let stats_service = ctx.stats_service();

    let mut resource = use_resource(move || {
        let stats_service = stats_service.clone();

        async move {
            let stats = stats_service
                .model_stats()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(map_model_stats(&stats))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page progress-page",
            header { class: "view-header",
                h2 { class: "view-title", "Model Progress" }
                p { class: "view-subtitle",
                    "How the classifier improves as artworks get classified."
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
                ViewState::Ready(stats) => rsx! {
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
                    div { class: "progress-section",
                        h3 { "Overall progress" }
                        div { class: "progress-track",
                            div {
                                class: "progress-fill",
                                style: "width: {stats.progress_percent}%",
                            }
                        }
                    }
                    div { class: "progress-section",
                        h3 { "Learning curve" }
                        if let Some(points) = stats.curve_points.as_ref() {
                            svg {
                                class: "learning-curve",
                                view_box: "0 0 100 40",
                                preserve_aspect_ratio: "none",
                                polyline {
                                    points: "{points}",
                                    fill: "none",
                                    stroke: "currentColor",
                                    stroke_width: "1.5",
                                }
                            }
                        } else {
                            p { class: "muted", "Not enough classifications yet to draw a curve." }
                        }
                    }
                    if !stats.confidence_bars.is_empty() {
                        div { class: "progress-section",
                            h3 { "Prediction confidence" }
                            {stats.confidence_bars.iter().map(|bar| rsx! {
                                div { class: "confidence-row", key: "{bar.label}",
                                    span { class: "confidence-label", "{bar.label}" }
                                    div { class: "progress-track",
                                        div {
                                            class: "progress-fill",
                                            style: "width: {bar.percent}%",
                                        }
                                    }
                                    span { class: "confidence-percent", "{bar.percent}%" }
                                }
                            })}
                        }
                    }
                },
            }
        }
    }
}
