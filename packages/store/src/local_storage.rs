//! # `localStorage` token store, browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the web platform. The
//! token is a single string item under [`TOKEN_KEY`].
//!
//! Storage can be missing (no `window`) or refused (private browsing, disabled
//! cookies); both surface as [`StoreError::Unavailable`] and the session simply
//! starts signed out.

use web_sys::Storage;

use crate::token::{TokenStore, TOKEN_KEY};
use crate::StoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl TokenStore for LocalStorageStore {
    async fn get(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(TOKEN_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    async fn set(&self, token: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    async fn remove(&self) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
