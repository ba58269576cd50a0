//! # Keyed query cache
//!
//! [`QueryCache`] maps each [`QueryKey`] to one of three slots:
//!
//! | Slot | Meaning |
//! |------|---------|
//! | `Fresh` | Last successful read, served as-is until invalidated. |
//! | `Loading` | A request is in flight; later callers join it instead of issuing another. |
//! | `Stale` | Invalidated by a write; the old value stays readable via [`peek`](QueryCache::peek) until the next read replaces it. |
//!
//! Values are type-erased (`Rc<dyn Any>`). A lookup whose stored type does not
//! match the requested one is treated as a miss, so a key reused with another type
//! refetches instead of failing.
//!
//! ## Generations
//!
//! Each in-flight request carries a generation number. Invalidating or clearing an
//! entry moves it to a new generation, so a response that was already on the wire
//! when the write landed is dropped instead of being cached as fresh.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::{MutationSpec, QueryKey};

type Value = Rc<dyn Any>;
type Pending<T, E> = Shared<LocalBoxFuture<'static, Result<T, E>>>;

enum Slot {
    Fresh(Value),
    Loading {
        pending: Value,
        previous: Option<Value>,
    },
    Stale(Value),
}

struct Entry {
    slot: Slot,
    generation: u64,
}

/// Notification sent to subscribers after the cache changes underneath them.
#[derive(Clone, Debug, PartialEq)]
pub enum CacheEvent {
    /// A mutation succeeded; `keys` are the cached entries that went stale.
    Invalidated {
        resources: Vec<&'static str>,
        keys: Vec<QueryKey>,
    },
    /// Every entry was dropped (login or logout).
    Cleared,
}

impl CacheEvent {
    /// Whether a reader of `key` should refetch.
    pub fn affects(&self, key: &QueryKey) -> bool {
        match self {
            CacheEvent::Invalidated { resources, .. } => key.belongs_to(resources),
            CacheEvent::Cleared => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Fresh,
    Stale,
}

type Subscriber = Rc<dyn Fn(&CacheEvent)>;

#[derive(Default)]
struct Inner {
    entries: HashMap<QueryKey, Entry>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    next_generation: u64,
}

impl Inner {
    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

/// Shared handle to the client's query cache. Cloning is cheap and every clone
/// sees the same entries.
#[derive(Clone, Default)]
pub struct QueryCache {
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for QueryCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `key`, fetching it only if no fresh value or in-flight request exists.
    ///
    /// `fetch` is called at most once, and only when this caller has to start the
    /// request. Errors are returned to every caller sharing the request and are not
    /// cached.
    pub async fn query<T, E, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, E>
    where
        T: Clone + 'static,
        E: Clone + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        let joined = {
            let inner = self.inner.borrow();
            match inner.entries.get(&key) {
                Some(Entry {
                    slot: Slot::Fresh(value),
                    ..
                }) => {
                    if let Some(value) = value.downcast_ref::<T>() {
                        return Ok(value.clone());
                    }
                    tracing::warn!(%key, "cached value has a different type, refetching");
                    None
                }
                Some(Entry {
                    slot: Slot::Loading { pending, .. },
                    generation,
                }) => pending
                    .downcast_ref::<Pending<T, E>>()
                    .map(|pending| (pending.clone(), *generation)),
                _ => None,
            }
        };

        let (pending, generation) = match joined {
            Some(joined) => {
                tracing::debug!(%key, "joining in-flight query");
                joined
            }
            None => self.start(key.clone(), fetch()),
        };

        let result = pending.await;
        self.settle(&key, generation, &result);
        result
    }

    fn start<T, E, Fut>(&self, key: QueryKey, fut: Fut) -> (Pending<T, E>, u64)
    where
        T: Clone + 'static,
        E: Clone + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        let pending: Pending<T, E> = fut.boxed_local().shared();
        let mut inner = self.inner.borrow_mut();
        let generation = inner.bump_generation();
        let previous = inner.entries.remove(&key).and_then(|entry| match entry.slot {
            Slot::Fresh(value) | Slot::Stale(value) => Some(value),
            Slot::Loading { previous, .. } => previous,
        });
        tracing::debug!(%key, generation, "starting query");
        inner.entries.insert(
            key,
            Entry {
                slot: Slot::Loading {
                    pending: Rc::new(pending.clone()),
                    previous,
                },
                generation,
            },
        );
        (pending, generation)
    }

    /// Record the outcome of the request started at `generation`, unless the entry
    /// was invalidated, cleared or restarted in the meantime.
    fn settle<T: Clone + 'static, E>(&self, key: &QueryKey, generation: u64, result: &Result<T, E>) {
        let mut inner = self.inner.borrow_mut();
        let Some(entry) = inner.entries.get_mut(key) else {
            return;
        };
        if entry.generation != generation {
            return;
        }
        let Slot::Loading { previous, .. } = &mut entry.slot else {
            return;
        };
        match result {
            Ok(value) => entry.slot = Slot::Fresh(Rc::new(value.clone())),
            Err(_) => match previous.take() {
                Some(value) => entry.slot = Slot::Stale(value),
                None => {
                    inner.entries.remove(key);
                }
            },
        }
    }

    /// Last known value for `key`, fresh or stale.
    pub fn peek<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        let inner = self.inner.borrow();
        let value = match &inner.entries.get(key)?.slot {
            Slot::Fresh(value) | Slot::Stale(value) => value,
            Slot::Loading { previous, .. } => previous.as_ref()?,
        };
        value.downcast_ref::<T>().cloned()
    }

    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        match self.inner.borrow().entries.get(key).map(|e| &e.slot) {
            None => QueryStatus::Idle,
            Some(Slot::Loading { .. }) => QueryStatus::Loading,
            Some(Slot::Fresh(_)) => QueryStatus::Fresh,
            Some(Slot::Stale(_)) => QueryStatus::Stale,
        }
    }

    /// Run a write and, only if it succeeds, invalidate what `spec` declares.
    ///
    /// The result resolves as soon as the write does; refetches are left to
    /// subscribers and are not awaited here.
    pub async fn mutate<T, E, Fut>(&self, spec: &MutationSpec, fut: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        match fut.await {
            Ok(value) => {
                tracing::debug!(mutation = spec.name, "mutation succeeded");
                self.invalidate(spec.invalidates);
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(mutation = spec.name, "mutation failed, cache untouched");
                Err(e)
            }
        }
    }

    /// Mark every entry of `resources` stale and notify subscribers.
    ///
    /// Returns the keys that were affected.
    pub fn invalidate(&self, resources: &[&'static str]) -> Vec<QueryKey> {
        let keys = {
            let mut inner = self.inner.borrow_mut();
            let mut keys: Vec<QueryKey> = inner
                .entries
                .keys()
                .filter(|key| key.belongs_to(resources))
                .cloned()
                .collect();
            keys.sort();
            for key in &keys {
                let generation = inner.bump_generation();
                let Some(entry) = inner.entries.remove(key) else {
                    continue;
                };
                let stale = match entry.slot {
                    Slot::Fresh(value) | Slot::Stale(value) => Some(value),
                    Slot::Loading { previous, .. } => previous,
                };
                if let Some(value) = stale {
                    inner.entries.insert(
                        key.clone(),
                        Entry {
                            slot: Slot::Stale(value),
                            generation,
                        },
                    );
                }
            }
            keys
        };

        tracing::debug!(?resources, count = keys.len(), "invalidated queries");
        self.emit(&CacheEvent::Invalidated {
            resources: resources.to_vec(),
            keys: keys.clone(),
        });
        keys
    }

    /// Drop every entry, e.g. when the signed-in identity changes.
    pub fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
        tracing::debug!("query cache cleared");
        self.emit(&CacheEvent::Cleared);
    }

    pub fn subscribe(&self, subscriber: impl Fn(&CacheEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.subscribers.push((id, Rc::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(existing, _)| *existing != id);
    }

    fn emit(&self, event: &CacheEvent) {
        // Subscribers may call back into the cache, so release the borrow first.
        let subscribers: Vec<Subscriber> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, s)| s.clone())
            .collect();
        for subscriber in subscribers {
            subscriber(event);
        }
    }
}
