//! # Query crate: the client-side synchronization layer
//!
//! Every read the UI performs against the API goes through a [`QueryCache`] under a
//! [`QueryKey`], and every write goes through [`QueryCache::mutate`] with a
//! [`MutationSpec`] naming the resources it makes stale.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`QueryKey`] | Resource name plus ordered parameters, e.g. `matches?limit=20&rings=2`. |
//! | [`MutationSpec`] | A write operation and the resources it invalidates on success. |
//! | [`QueryCache`] | Keyed values, single-flight fetches, invalidation and change events. |
//! | [`CacheEvent`] | Emitted to subscribers when entries are invalidated or the cache is cleared. |
//!
//! The cache never patches a value after a write. A successful mutation marks the
//! affected entries stale and tells subscribers; whoever is displaying them refetches.
//! A failed mutation leaves everything as it was.
//!
//! The crate is framework-agnostic and single-threaded (`Rc`/`RefCell`): it runs on
//! the browser event loop, and on a current-thread runtime in tests.

mod cache;
mod key;
mod mutation;

pub use cache::{CacheEvent, QueryCache, QueryStatus, SubscriptionId};
pub use key::QueryKey;
pub use mutation::MutationSpec;
