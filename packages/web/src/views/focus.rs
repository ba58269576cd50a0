//! Focus session page.

use dioxus::prelude::*;
use ui::views::FocusView;

#[component]
pub fn Focus() -> Element {
    rsx! {
        FocusView {}
    }
}
