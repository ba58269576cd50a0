//! # API crate: typed client for the Synapse backend
//!
//! Everything the frontends know about the REST API lives here: request and
//! response models, client-side validation, the bearer credential, and the
//! cache keys and mutation declarations the UI hands to the [`query`] crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | JWT credential with expiry, and the shared [`AuthContext`] holding it |
//! | [`client`] | [`ApiClient`], one async method per endpoint |
//! | [`error`] | [`ApiError`], mapping of `{"detail": ...}` error bodies |
//! | [`keys`] | [`QueryKey`](query::QueryKey) constructors for every cached read |
//! | [`models`] | Wire types (`UserProfile`, `MatchResult`, `Post`, `FocusSession`, ...) |
//! | [`mutations`] | [`MutationSpec`](query::MutationSpec) per write, with the resources it invalidates |
//! | [`validate`] | Length and range checks applied before a request is sent |
//!
//! ## Flow
//!
//! A page reads through the cache:
//!
//! ```ignore
//! let client = client.clone();
//! cache.query(keys::me(), move || async move { client.me().await }).await?;
//! ```
//!
//! and writes through it, so that what the write touched gets refetched:
//!
//! ```ignore
//! cache.mutate(&mutations::SYNC_GOAL, client.sync_goal(goal)).await?;
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod keys;
pub mod models;
pub mod mutations;
pub mod validate;

pub use auth::{AuthContext, Credential};
pub use client::ApiClient;
pub use error::ApiError;
pub use models::*;
pub use validate::ValidationError;
