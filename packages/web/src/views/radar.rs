//! Radar page: location and nearby matches.

use dioxus::prelude::*;
use ui::views::RadarView;

#[component]
pub fn Radar() -> Element {
    rsx! {
        RadarView {}
    }
}
