//! # Filesystem-backed token store
//!
//! [`FileStore`] keeps the access token in a single file named after
//! [`TOKEN_KEY`] inside its base directory. It is the native counterpart of the
//! browser's `localStorage`.
//!
//! ## Platform data directories
//!
//! [`FileStore::in_data_dir`] resolves the base through [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/synapse/` |
//! | Linux | `~/.local/share/synapse/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\synapse\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::token::{TokenStore, TOKEN_KEY};
use crate::StoreError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store under the platform data directory, if the platform has one.
    pub fn in_data_dir() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("synapse")))
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileStore {
    async fn get(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, token: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.token_path(), token)?;
        Ok(())
    }

    async fn remove(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.token_path()) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("synapse_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        assert_eq!(store.get().await.unwrap(), None);
        // Removing a token that was never written is fine
        store.remove().await.unwrap();

        store.set("header.payload.sig").await.unwrap();

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(
            reopened.get().await.unwrap().as_deref(),
            Some("header.payload.sig")
        );

        reopened.remove().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
