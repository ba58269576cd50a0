use std::sync::{Arc, Mutex};

use crate::token::TokenStore;
use crate::StoreError;

/// In-memory TokenStore for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if restored from a previous run.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

/// Equal when both handles share the same slot.
impl PartialEq for MemoryStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
    }
}

impl TokenStore for MemoryStore {
    async fn get(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn set(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> Result<(), StoreError> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).take();
        Ok(())
    }
}
