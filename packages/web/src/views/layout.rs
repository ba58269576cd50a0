//! Route layouts. Each runs the guard for its kind of route before rendering
//! the outlet.

use dioxus::prelude::*;
use ui::{evaluate, use_session, BottomNav, GuardDecision, NavTab, RouteKind};

use crate::Route;

/// Layout for pages only signed-out users should see.
#[component]
pub fn PublicLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    match evaluate(RouteKind::Public, &session.state()) {
        GuardDecision::RedirectToHub => {
            nav.replace(Route::Hub {});
            rsx! {}
        }
        _ => rsx! {
            Outlet::<Route> {}
        },
    }
}

/// Layout for every signed-in page: the page itself plus the bottom bar.
#[component]
pub fn ProtectedLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    match evaluate(RouteKind::Protected, &session.state()) {
        GuardDecision::Wait => rsx! {
            div { class: "placeholder", "Loading..." }
        },
        GuardDecision::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::Render | GuardDecision::RedirectToHub => rsx! {
            div {
                class: "app-shell",
                Outlet::<Route> {}
            }
            BottomNav {
                active: tab_for(&route),
                on_select: move |tab: NavTab| {
                    nav.push(route_for(tab));
                },
            }
        },
    }
}

fn tab_for(route: &Route) -> Option<NavTab> {
    match route {
        Route::Hub {} => Some(NavTab::Hub),
        Route::Radar {} => Some(NavTab::Radar),
        Route::Focus {} => Some(NavTab::Focus),
        Route::Profile {} => Some(NavTab::Profile),
        _ => None,
    }
}

fn route_for(tab: NavTab) -> Route {
    match tab {
        NavTab::Hub => Route::Hub {},
        NavTab::Radar => Route::Radar {},
        NavTab::Focus => Route::Focus {},
        NavTab::Profile => Route::Profile {},
    }
}
