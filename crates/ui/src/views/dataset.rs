use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::{map_artwork_card, ArtworkCardVm};

#[component]
pub fn DatasetView() -> Element {
    let ctx = use_context::<AppContext>();
    let artwork_service = ctx.artwork_service();
    let config = ctx.api_config().clone();

    let mut query = use_signal(String::new);

    let mut resource = use_resource(move || {
        let artwork_service = artwork_service.clone();
        let config = config.clone();

        async move {
            let artworks = artwork_service
                .list_artworks()
                .await
                .map_err(|_| ViewError::Unknown)?;
            let cards = artworks
                .iter()
                .map(|artwork| map_artwork_card(&config, artwork))
                .collect::<Vec<_>>();
            Ok(cards)
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dataset-page",
            header { class: "view-header",
                h2 { class: "view-title", "Dataset" }
                p { class: "view-subtitle", "All artworks known to the backend." }
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
                ViewState::Ready(cards) => {
                    let current_query = query();
                    let visible = cards
                        .iter()
                        .filter(|card| card.matches_query(&current_query))
                        .cloned()
                        .collect::<Vec<ArtworkCardVm>>();
                    let count_label = format!("{} of {} artworks", visible.len(), cards.len());
                    rsx! {
                        div { class: "dataset-toolbar",
                            input {
                                class: "search-input",
                                r#type: "search",
                                placeholder: "Search by title or artist",
                                value: "{current_query}",
                                oninput: move |event| query.set(event.value()),
                            }
                            span { class: "dataset-count", "{count_label}" }
                        }
                        if cards.is_empty() {
                            div { class: "empty-card",
                                h3 { "No artworks yet" }
                                p { "The backend has no artworks in its collection." }
                            }
                        } else if visible.is_empty() {
                            div { class: "empty-card",
                                h3 { "No matches" }
                                p { "No artwork matches that search." }
                            }
                        } else {
                            div { class: "artwork-grid",
                                {visible.iter().map(|card| rsx! {
                                    div { class: "artwork-card", key: "{card.id}",
                                        img {
                                            class: "artwork-image",
                                            src: "{card.image_url}",
                                            alt: "{card.title}",
                                        }
                                        div { class: "artwork-meta",
                                            h3 { "{card.title}" }
                                            p { "{card.artist}, {card.year_label}" }
                                        }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
