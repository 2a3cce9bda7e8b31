use dioxus::prelude::*;
use museum_core::model::{Question, QuestionId};
use services::QuestionServiceError;

use crate::context::AppContext;
use crate::views::{view_state_from_resource, ViewError, ViewState};

fn form_error_message(err: &QuestionServiceError) -> String {
    match err {
        QuestionServiceError::Question(err) => err.to_string(),
        _ => "Could not save the question. Please try again.".to_string(),
    }
}

#[component]
pub fn QuestionnaireView() -> Element {
    let ctx = use_context::<AppContext>();
    let question_service = ctx.question_service();

    let mut text = use_signal(String::new);
    let mut option_inputs = use_signal(|| vec![String::new(), String::new()]);
    let mut correct_answer = use_signal(String::new);
    let mut editing = use_signal(|| None::<QuestionId>);
    let mut form_error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let service_for_resource = question_service.clone();
    let mut resource = use_resource(move || {
        let question_service = service_for_resource.clone();
        async move {
            question_service
                .list_questions()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });
    let state = view_state_from_resource(&resource);

    let reset_form = use_callback(move |()| {
        let mut text = text;
        let mut option_inputs = option_inputs;
        let mut correct_answer = correct_answer;
        let mut editing = editing;
        let mut form_error = form_error;
        text.set(String::new());
        option_inputs.set(vec![String::new(), String::new()]);
        correct_answer.set(String::new());
        editing.set(None);
        form_error.set(None);
    });

    let begin_edit = use_callback(move |question: Question| {
        let mut text = text;
        let mut option_inputs = option_inputs;
        let mut correct_answer = correct_answer;
        let mut editing = editing;
        let mut form_error = form_error;
        text.set(question.text);
        option_inputs.set(question.options);
        correct_answer.set(question.correct_answer.unwrap_or_default());
        editing.set(Some(question.id));
        form_error.set(None);
    });

    let service_for_save = question_service.clone();
    let save_question = use_callback(move |()| {
        if busy() {
            return;
        }
        let question_service = service_for_save.clone();
        let mut form_error = form_error;
        let mut busy = busy;
        let mut resource = resource;

        // Blank rows are just unused slots of the editor, not part of the
        // question; validation applies to what remains.
        let draft_text = text();
        let draft_options = option_inputs()
            .into_iter()
            .filter(|option| !option.trim().is_empty())
            .collect::<Vec<_>>();
        let chosen = correct_answer();
        let draft_correct = if chosen.trim().is_empty() {
            None
        } else {
            Some(chosen)
        };
        let target = editing();

        spawn(async move {
            busy.set(true);
            let result = match target {
                Some(id) => {
                    question_service
                        .update_question(id, draft_text, draft_options, draft_correct)
                        .await
                }
                None => {
                    question_service
                        .create_question(draft_text, draft_options, draft_correct)
                        .await
                }
            };
            busy.set(false);

            match result {
                Ok(_) => {
                    reset_form.call(());
                    resource.restart();
                }
                Err(err) => form_error.set(Some(form_error_message(&err))),
            }
        });
    });

    let service_for_delete = question_service.clone();
    let delete_question = use_callback(move |id: QuestionId| {
        if busy() {
            return;
        }
        let question_service = service_for_delete.clone();
        let mut form_error = form_error;
        let mut busy = busy;
        let mut resource = resource;

        spawn(async move {
            busy.set(true);
            let result = question_service.delete_question(id).await;
            busy.set(false);

            match result {
                Ok(()) => {
                    if editing() == Some(id) {
                        reset_form.call(());
                    }
                    resource.restart();
                }
                Err(err) => form_error.set(Some(form_error_message(&err))),
            }
        });
    });

    let is_busy = busy();
    let is_editing = editing().is_some();
    let form_title = if is_editing { "Edit question" } else { "New question" };
    let save_label = if is_editing { "Save changes" } else { "Add question" };
    let options_snapshot = option_inputs();
    let correct_snapshot = correct_answer();
    let option_rows = options_snapshot.iter().enumerate().map(|(index, value)| {
        let value = value.clone();
        let number = index + 1;
        let removable = options_snapshot.len() > 2;
        rsx! {
            div { class: "option-row", key: "{index}",
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "Option {number}",
                    value: "{value}",
                    oninput: move |event| {
                        let mut inputs = option_inputs.write();
                        if let Some(slot) = inputs.get_mut(index) {
                            *slot = event.value();
                        }
                    },
                }
                if removable {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        disabled: is_busy,
                        onclick: move |_| {
                            let mut inputs = option_inputs.write();
                            if index < inputs.len() {
                                inputs.remove(index);
                            }
                        },
                        "Remove"
                    }
                }
            }
        }
    });
    let answer_choices = options_snapshot
        .iter()
        .filter(|option| !option.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>();
    let preview_text = text();
    let show_preview = !preview_text.trim().is_empty() && !answer_choices.is_empty();

    rsx! {
        div { class: "page questionnaire-page",
            header { class: "view-header",
                h2 { class: "view-title", "Questionnaire" }
                p { class: "view-subtitle",
                    "The questions shown for every artwork during learning."
                }
            }
            div { class: "view-divider" }
            div { class: "questionnaire-grid",
                form {
                    class: "question-form",
                    onsubmit: move |event| {
                        event.prevent_default();
                        save_question.call(());
                    },
                    h3 { "{form_title}" }
                    if let Some(message) = form_error() {
                        p { class: "view-error", "{message}" }
                    }
                    label { class: "field-label", "Question" }
                    input {
                        class: "text-input",
                        id: "question-text",
                        r#type: "text",
                        placeholder: "e.g. What style is this artwork?",
                        value: "{text}",
                        oninput: move |event| text.set(event.value()),
                    }
                    label { class: "field-label", "Options" }
                    {option_rows}
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        disabled: is_busy,
                        onclick: move |_| option_inputs.write().push(String::new()),
                        "Add option"
                    }
                    label { class: "field-label", "Correct answer (optional)" }
                    select {
                        class: "select-input",
                        value: "{correct_snapshot}",
                        oninput: move |event| correct_answer.set(event.value()),
                        option { value: "", "None" }
                        {answer_choices.iter().map(|choice| rsx! {
                            option { value: "{choice}", key: "{choice}", "{choice}" }
                        })}
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            id: "question-save",
                            r#type: "submit",
                            disabled: is_busy,
                            "{save_label}"
                        }
                        if is_editing {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| reset_form.call(()),
                                "Cancel"
                            }
                        }
                    }
                    if show_preview {
                        div { class: "question-preview",
                            h4 { "Preview" }
                            p { class: "learning-question-text", "{preview_text}" }
                            div { class: "option-grid",
                                {answer_choices.iter().map(|choice| rsx! {
                                    span { class: "option-btn", key: "{choice}", "{choice}" }
                                })}
                            }
                        }
                    }
                }
                div { class: "question-list",
                    h3 { "Existing questions" }
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
                        ViewState::Ready(questions) => {
                            if questions.is_empty() {
                                rsx! {
                                    div { class: "empty-card",
                                        p { "No questions yet. Add the first one on the left." }
                                    }
                                }
                            } else {
                                rsx! {
                                    {questions.iter().map(|question| {
                                        let question = question.clone();
                                        let question_id = question.id;
                                        let options_label = question.options.join(" / ");
                                        let for_edit = question.clone();
                                        rsx! {
                                            div { class: "question-item", key: "{question_id}",
                                                div { class: "question-item-body",
                                                    h4 { "{question.text}" }
                                                    p { class: "muted", "{options_label}" }
                                                    if let Some(answer) = question.correct_answer.as_ref() {
                                                        p { class: "muted", "Correct: {answer}" }
                                                    }
                                                }
                                                div { class: "question-item-actions",
                                                    button {
                                                        class: "btn btn-secondary",
                                                        r#type: "button",
                                                        disabled: is_busy,
                                                        onclick: move |_| begin_edit.call(for_edit.clone()),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-danger",
                                                        r#type: "button",
                                                        disabled: is_busy,
                                                        onclick: move |_| delete_question.call(question_id),
                                                        "Delete"
                                                    }
                                                }
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
}
