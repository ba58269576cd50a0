//! Platform seams: timers and where the access token is persisted.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Native**: a file under the platform data directory via [`store::FileStore`]

use std::time::Duration;

/// Sleep without blocking the event loop.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokenStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStore = store::FileStore;

/// The token store for the platform we are compiled for.
pub fn token_store() -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::in_data_dir()
            .unwrap_or_else(|| store::FileStore::new(std::path::PathBuf::from(".synapse")))
    }
}
