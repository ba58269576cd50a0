pub mod config;
mod error;
mod token;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{ApiConfig, ClientConfig, LogConfig, UiConfig};
pub use error::StoreError;
pub use token::{TokenStore, TOKEN_KEY};
