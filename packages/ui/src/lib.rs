//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`SessionProvider`], [`Session`] handle, auth state |
//! | [`hooks`] | `use_query`, `use_mutation`, `use_now` over the query cache |
//! | [`guard`] | Route guard decision for public and protected routes |
//! | [`components`] | Cards, forms and the bottom navigation bar |
//! | [`views`] | One view per page: login, hub, radar, focus, profile |

use dioxus::prelude::*;

pub mod components;
pub mod guard;
pub mod hooks;
mod platform;
pub mod session;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod testing;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub use components::{BottomNav, NavTab};
pub use guard::{evaluate, GuardDecision, RouteKind};
pub use hooks::{use_mutation, use_now, use_query, Mutation, MutationState};
pub use platform::PlatformTokenStore;
pub use session::{use_session, AuthState, AuthStatus, Session, SessionProvider};

pub const SYNAPSE_CSS: Asset = asset!("/assets/synapse.css");
