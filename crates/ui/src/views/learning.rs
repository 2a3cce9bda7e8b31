use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::{map_artwork_card, map_model_stats, LearningIntent, LearningVm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastAction {
    StartSession,
    Submit,
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LearningBody {
    /// The session is checked out for an in-flight request.
    Working,
    NoQuestions,
    Artwork,
    Exhausted,
}

/// The session is taken out of its signal for the duration of a submit or
/// skip, so "session absent while busy" means in flight, not empty.
fn learning_body(
    busy: bool,
    session_loaded: bool,
    has_questions: bool,
    has_artwork: bool,
) -> LearningBody {
    if busy && !session_loaded {
        return LearningBody::Working;
    }
    if !has_questions {
        return LearningBody::NoQuestions;
    }
    if has_artwork {
        LearningBody::Artwork
    } else {
        LearningBody::Exhausted
    }
}

#[component]
pub fn LearningView() -> Element {
    let ctx = use_context::<AppContext>();
    let backend = ctx.backend();

    let error = use_signal(|| None::<ViewError>);
    let notice = use_signal(|| None::<&'static str>);
    let vm = use_signal(|| None::<LearningVm>);
    let busy = use_signal(|| false);
    let last_action = use_signal(|| None::<LastAction>);

    let backend_for_resource = backend.clone();
    let resource = use_resource(move || {
        let backend = backend_for_resource.clone();
        let mut error = error;
        let mut notice = notice;
        let mut vm = vm;
        let mut last_action = last_action;

        async move {
            last_action.set(Some(LastAction::StartSession));
            notice.set(None);
            let started = LearningVm::start(backend).await?;
            vm.set(Some(started));
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: LearningIntent| {
        let mut error = error;
        let mut notice = notice;
        let mut vm = vm;
        let mut busy = busy;
        let mut last_action = last_action;

        match intent {
            LearningIntent::Answer(question_id, option) => {
                if busy() {
                    return;
                }
                if let Some(vm) = vm.write().as_mut() {
                    vm.record_answer(question_id, option);
                }
            }
            LearningIntent::Submit => {
                spawn(async move {
                    last_action.set(Some(LastAction::Submit));
                    let mut local_vm = {
                        let mut guard = vm.write();
                        guard.take()
                    };
                    let Some(mut vm_value) = local_vm.take() else {
                        error.set(Some(ViewError::Unknown));
                        return;
                    };

                    busy.set(true);
                    let result = vm_value.submit().await;
                    busy.set(false);

                    // Always put the session back so the UI stays usable after errors.
                    {
                        let mut guard = vm.write();
                        *guard = Some(vm_value);
                    }

                    match result {
                        Ok(crate::vm::LearningOutcome::Advanced) => {
                            error.set(None);
                            notice.set(Some("Classification saved."));
                        }
                        Ok(crate::vm::LearningOutcome::Incomplete) => {
                            notice.set(Some("Answer every question before classifying."));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            notice.set(None);
                            error.set(Some(err));
                        }
                    }
                });
            }
            LearningIntent::Skip => {
                spawn(async move {
                    last_action.set(Some(LastAction::Skip));
                    let mut local_vm = {
                        let mut guard = vm.write();
                        guard.take()
                    };
                    let Some(mut vm_value) = local_vm.take() else {
                        error.set(Some(ViewError::Unknown));
                        return;
                    };

                    busy.set(true);
                    let result = vm_value.skip().await;
                    busy.set(false);

                    {
                        let mut guard = vm.write();
                        *guard = Some(vm_value);
                    }

                    match result {
                        Ok(crate::vm::LearningOutcome::Skipped) => {
                            error.set(None);
                            notice.set(Some("Artwork skipped."));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            notice.set(None);
                            error.set(Some(err));
                        }
                    }
                });
            }
        }
    });

    let retry_action = use_callback(move |()| match last_action() {
        Some(LastAction::StartSession) | None => {
            let mut resource = resource;
            resource.restart();
        }
        Some(LastAction::Submit) => dispatch_intent.call(LearningIntent::Submit),
        Some(LastAction::Skip) => dispatch_intent.call(LearningIntent::Skip),
    });

    let vm_guard = vm.read();
    let session_loaded = vm_guard.is_some();
    let has_questions = vm_guard.as_ref().is_some_and(LearningVm::has_questions);
    let is_complete = vm_guard.as_ref().is_some_and(LearningVm::is_complete);
    let question_cards = vm_guard
        .as_ref()
        .map(LearningVm::question_cards)
        .unwrap_or_default();
    let artwork_card = vm_guard
        .as_ref()
        .and_then(LearningVm::artwork)
        .map(|artwork| map_artwork_card(ctx.api_config(), artwork));
    let stats_vm = vm_guard
        .as_ref()
        .and_then(LearningVm::stats)
        .map(map_model_stats);
    drop(vm_guard);

    let is_busy = busy();
    let body = learning_body(is_busy, session_loaded, has_questions, artwork_card.is_some());
    let submit_label = if is_busy { "Classifying..." } else { "Classify" };
    let question_blocks = question_cards.iter().map(|question| {
        let question_id = question.id;
        let options = question.options.iter().map(move |option| {
            let label = option.label.clone();
            let class = if option.selected {
                "option-btn option-btn--selected"
            } else {
                "option-btn"
            };
            rsx! {
                button {
                    class: "{class}",
                    r#type: "button",
                    disabled: is_busy,
                    onclick: move |_| {
                        dispatch_intent
                            .call(LearningIntent::Answer(question_id, label.clone()));
                    },
                    "{option.label}"
                }
            }
        });
        rsx! {
            div { class: "learning-question",
                h3 { class: "learning-question-text", "{question.text}" }
                div { class: "option-grid",
                    {options}
                }
            }
        }
    });

    rsx! {
        div { class: "page learning-page",
            header { class: "view-header",
                h2 { class: "view-title", "Active Learning" }
                p { class: "view-subtitle",
                    "Answer the questions for each artwork. The backend picks which artwork to show next."
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
                        onclick: move |_| retry_action.call(()),
                        "Retry"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = *error.read() {
                        p { class: "view-error", "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| retry_action.call(()),
                            "Retry"
                        }
                    }
                    if let Some(text) = notice() {
                        p { class: "view-notice", "{text}" }
                    }
                    if let Some(stats) = stats_vm.as_ref() {
                        div { class: "learning-stats-row",
                            span { "Classified: {stats.classified_label}" }
                            span { "Model accuracy: {stats.accuracy_label}" }
                        }
                    }
                    if body == LearningBody::Working {
                        div { class: "empty-card",
                            p { "Working..." }
                        }
                    } else if body == LearningBody::NoQuestions {
                        div { class: "empty-card",
                            h3 { "No questions defined" }
                            p { "Create classification questions before starting the learning phase." }
                            Link { class: "btn btn-primary", to: Route::Questionnaire {}, "Go to Questionnaire" }
                        }
                    } else if let Some(artwork) = artwork_card.as_ref() {
                        div { class: "learning-grid",
                            div { class: "artwork-card",
                                img {
                                    class: "artwork-image",
                                    src: "{artwork.image_url}",
                                    alt: "{artwork.title}",
                                }
                                div { class: "artwork-meta",
                                    h3 { "{artwork.title}" }
                                    p { "{artwork.artist}, {artwork.year_label}" }
                                }
                                div { class: "artwork-actions",
                                    button {
                                        class: "btn btn-secondary",
                                        id: "learning-skip",
                                        r#type: "button",
                                        disabled: is_busy,
                                        onclick: move |_| dispatch_intent.call(LearningIntent::Skip),
                                        "Skip"
                                    }
                                    button {
                                        class: "btn btn-primary",
                                        id: "learning-classify",
                                        r#type: "button",
                                        disabled: !is_complete || is_busy,
                                        onclick: move |_| dispatch_intent.call(LearningIntent::Submit),
                                        "{submit_label}"
                                    }
                                }
                            }
                            div { class: "learning-questions",
                                {question_blocks}
                                if let Some(stats) = stats_vm.as_ref() {
                                    div { class: "learning-progress",
                                        div { class: "learning-progress-labels",
                                            span { "Overall progress" }
                                            span { "{stats.progress_percent}%" }
                                        }
                                        div { class: "progress-track",
                                            div {
                                                class: "progress-fill",
                                                style: "width: {stats.progress_percent}%",
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        div { class: "empty-card",
                            h3 { "No artwork available" }
                            p { "Every artwork has been classified, or none have been added yet." }
                        }
                    }
                },
            }
        }
    }
}
