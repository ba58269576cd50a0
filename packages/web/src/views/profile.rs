//! Profile page.

use dioxus::prelude::*;
use ui::views::ProfileView;

#[component]
pub fn Profile() -> Element {
    rsx! {
        ProfileView {}
    }
}
