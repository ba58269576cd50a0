use api::validate::{FEEDBACK_MAX, FEEDBACK_MIN};
use dioxus::prelude::*;

use crate::components::InlineError;
use crate::hooks::Mutation;

/// Text box for impact feedback, bound to the mutation that sends it.
///
/// The form only collects text; `on_submit` decides what to send. Length is
/// checked by the client before dispatch, the counter here is a hint.
#[component]
pub fn FeedbackForm(
    mutation: Mutation,
    on_submit: EventHandler<String>,
    #[props(default = "Give impact".to_string())] submit_label: String,
) -> Element {
    let mut text = use_signal(String::new);

    use_effect(move || {
        if mutation.is_success() {
            text.set(String::new());
        }
    });

    let count = text.read().trim().chars().count();
    let counter_class = if count < FEEDBACK_MIN || count > FEEDBACK_MAX {
        "feedback-form__counter feedback-form__counter--invalid"
    } else {
        "feedback-form__counter"
    };

    rsx! {
        form {
            class: "feedback-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(text());
            },
            textarea {
                class: "feedback-form__input",
                rows: 3,
                placeholder: "What did you learn from this? (at least {FEEDBACK_MIN} characters)",
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }
            div {
                class: "feedback-form__footer",
                span { class: counter_class, "{count}/{FEEDBACK_MAX}" }
                if mutation.is_success() {
                    span { class: "feedback-form__success", "Impact sent" }
                } else {
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: mutation.is_pending(),
                        if mutation.is_pending() { "Sending..." } else { "{submit_label}" }
                    }
                }
            }
            InlineError { error: mutation.error() }
        }
    }
}
