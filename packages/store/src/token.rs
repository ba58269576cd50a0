//! # Credential persistence
//!
//! The access token survives reloads through a [`TokenStore`]. It is stored raw,
//! under [`TOKEN_KEY`]; decoding and expiry checks happen in the `api` crate.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`MemoryStore`](crate::MemoryStore) | any | process memory (tests) |
//! | [`FileStore`](crate::FileStore) | native | one file under the app data directory |
//! | `LocalStorageStore` | web (`web` feature) | `window.localStorage` |

use std::future::Future;

use crate::StoreError;

/// Fixed key the access token is stored under.
pub const TOKEN_KEY: &str = "synapse.access_token";

/// Async storage for the single access token.
pub trait TokenStore {
    fn get(&self) -> impl Future<Output = Result<Option<String>, StoreError>>;
    fn set(&self, token: &str) -> impl Future<Output = Result<(), StoreError>>;
    fn remove(&self) -> impl Future<Output = Result<(), StoreError>>;
}
