use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(%path, "no route matched");

    rsx! {
        div {
            class: "placeholder",
            p { "Nothing lives at /{path}." }
            Link { to: Route::Hub {}, "Back to the hub" }
        }
    }
}
