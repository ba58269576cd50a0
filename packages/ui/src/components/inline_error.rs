use api::ApiError;
use dioxus::prelude::*;

/// Error message shown next to the control that caused it.
#[component]
pub fn InlineError(error: Option<ApiError>) -> Element {
    let Some(error) = error else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "inline-error",
            role: "alert",
            "{error}"
        }
    }
}
