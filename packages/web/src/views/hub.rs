//! Hub page: stats, composer and curated feed.

use dioxus::prelude::*;
use ui::views::HubView;

#[component]
pub fn Hub() -> Element {
    rsx! {
        HubView {}
    }
}
