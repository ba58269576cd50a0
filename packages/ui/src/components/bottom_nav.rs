use dioxus::prelude::*;

use crate::icons::{FaHouse, FaSatelliteDish, FaStopwatch, FaUser};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Hub,
    Radar,
    Focus,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 4] = [NavTab::Hub, NavTab::Radar, NavTab::Focus, NavTab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Hub => "Hub",
            NavTab::Radar => "Radar",
            NavTab::Focus => "Focus",
            NavTab::Profile => "Profile",
        }
    }
}

/// Fixed bar at the bottom of every protected page.
#[component]
pub fn BottomNav(active: Option<NavTab>, on_select: EventHandler<NavTab>) -> Element {
    rsx! {
        nav {
            class: "bottom-nav",
            for tab in NavTab::ALL {
                NavButton {
                    key: "{tab:?}",
                    tab: tab,
                    active: active == Some(tab),
                    on_select: on_select,
                }
            }
        }
    }
}

#[component]
fn NavButton(tab: NavTab, active: bool, on_select: EventHandler<NavTab>) -> Element {
    let class = if active {
        "bottom-nav__tab bottom-nav__tab--active"
    } else {
        "bottom-nav__tab"
    };
    let label = tab.label();

    rsx! {
        button {
            class: "{class}",
            "aria-current": if active { "page" } else { "false" },
            onclick: move |_: MouseEvent| on_select.call(tab),
            match tab {
                NavTab::Hub => rsx! { Icon { icon: FaHouse, width: 18, height: 18 } },
                NavTab::Radar => rsx! { Icon { icon: FaSatelliteDish, width: 18, height: 18 } },
                NavTab::Focus => rsx! { Icon { icon: FaStopwatch, width: 18, height: 18 } },
                NavTab::Profile => rsx! { Icon { icon: FaUser, width: 18, height: 18 } },
            }
            span { "{label}" }
        }
    }
}
