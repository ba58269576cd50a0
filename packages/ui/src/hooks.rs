//! Hooks binding the [`QueryCache`](query::QueryCache) to components.
//!
//! | Hook | Purpose |
//! |------|---------|
//! | [`use_query`] | Read through the cache; refetch when a mutation invalidates the key. |
//! | [`use_mutation`] | Run one kind of write, track its state, invalidate on success. |
//! | [`use_now`] | Wall clock refreshed on a fixed tick. |

use std::future::Future;
use std::time::Duration;

use api::ApiError;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use query::{MutationSpec, QueryKey};

use crate::platform::sleep;
use crate::session::{use_session, Session};

/// Read `key` through the session's cache.
///
/// `key` and `fetch` may read signals; the query re-runs when they change, and
/// whenever a [`CacheEvent`](query::CacheEvent) touches the current key. The
/// previous value stays readable while a refetch is in flight.
pub fn use_query<T, K, F, Fut>(key: K, fetch: F) -> Resource<Result<T, ApiError>>
where
    T: Clone + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn(api::ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let session = use_session();
    let version = use_signal(|| 0u64);
    let mut current = use_hook(|| CopyValue::new(None::<QueryKey>));

    let subscription = use_hook(move || {
        session.cache().subscribe(move |event| {
            let stale = current.read().as_ref().is_some_and(|key| event.affects(key));
            if stale {
                let mut version = version;
                *version.write() += 1;
            }
        })
    });
    use_drop(move || session.cache().unsubscribe(subscription));

    use_resource(move || {
        version();
        let key = key();
        current.set(Some(key.clone()));
        let pending = fetch(session.client());
        let cache = session.cache();
        async move {
            let result = cache.query(key, move || pending).await;
            if let Err(e) = &result {
                if e.is_unauthorized() {
                    session.expire();
                }
            }
            result
        }
    })
}

#[derive(Clone, Debug, PartialEq)]
pub enum MutationState {
    Idle,
    Pending,
    Success,
    Error(ApiError),
}

/// Handle returned by [`use_mutation`]. `Copy`, so it can be moved into any
/// number of event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Mutation {
    spec: MutationSpec,
    session: Session,
    state: Signal<MutationState>,
    runs: Signal<u64>,
}

impl Mutation {
    pub fn state(&self) -> MutationState {
        self.state.read().clone()
    }

    pub fn is_pending(&self) -> bool {
        *self.state.read() == MutationState::Pending
    }

    pub fn is_success(&self) -> bool {
        *self.state.read() == MutationState::Success
    }

    pub fn error(&self) -> Option<ApiError> {
        match &*self.state.read() {
            MutationState::Error(e) => Some(e.clone()),
            _ => None,
        }
    }

    /// Run the write. Returns `None` if it failed, or if this mutation was
    /// already pending, in which case `write` is dropped unsent.
    ///
    /// On success the cache invalidates the resources it declares, and the state
    /// shows `Success` for `success_reset_ms` before going back to `Idle`.
    pub async fn run<T, Fut>(mut self, write: Fut) -> Option<T>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if *self.state.peek() == MutationState::Pending {
            tracing::debug!(mutation = self.spec.name, "already pending, ignoring");
            return None;
        }
        let session = self.session;
        let run = *self.runs.peek() + 1;
        self.runs.set(run);
        self.state.set(MutationState::Pending);

        match session.cache().mutate(&self.spec, write).await {
            Ok(value) => {
                self.state.set(MutationState::Success);
                let delay = Duration::from_millis(session.ui_config().success_reset_ms);
                spawn(async move {
                    sleep(delay).await;
                    // A newer run owns the state now.
                    if *self.runs.peek() == run {
                        self.state.set(MutationState::Idle);
                    }
                });
                Some(value)
            }
            Err(e) => {
                if e.is_unauthorized() {
                    session.expire();
                }
                self.state.set(MutationState::Error(e));
                None
            }
        }
    }

    /// Back to `Idle`, e.g. when the form it belongs to is closed.
    pub fn reset(&mut self) {
        if !self.is_pending() {
            self.state.set(MutationState::Idle);
        }
    }
}

pub fn use_mutation(spec: MutationSpec) -> Mutation {
    let state = use_signal(|| MutationState::Idle);
    let runs = use_signal(|| 0u64);
    Mutation {
        spec,
        session: use_session(),
        state,
        runs,
    }
}

/// The current time, refreshed every `tick`.
///
/// Anything derived from it is recomputed from scratch on each tick, so timer
/// drift never accumulates.
pub fn use_now(tick: Duration) -> Signal<DateTime<Utc>> {
    let mut now = use_signal(Utc::now);
    use_future(move || async move {
        loop {
            sleep(tick).await;
            now.set(Utc::now());
        }
    });
    now
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use dioxus::dioxus_core::VirtualDom;
    use store::{ClientConfig, FileStore};

    use super::*;
    use crate::session::SessionProvider;
    use crate::testing::{config_for, run_for, scratch_store, Log};

    /// No backend is needed: the writes below never touch the network.
    const UNREACHABLE: &str = "http://127.0.0.1:9/api/v1";

    #[derive(Clone, Copy, PartialEq)]
    enum Plan {
        Succeed,
        Fail,
        /// A second run while the first is still pending.
        Overlap,
    }

    #[component]
    fn App(
        config: ClientConfig,
        tokens: FileStore,
        plan: Plan,
        states: Log<MutationState>,
        outcomes: Log<Option<u32>>,
    ) -> Element {
        rsx! {
            SessionProvider {
                config: config,
                tokens: tokens,
                Runner { plan: plan, states: states, outcomes: outcomes }
            }
        }
    }

    #[component]
    fn Runner(plan: Plan, states: Log<MutationState>, outcomes: Log<Option<u32>>) -> Element {
        let mutation = use_mutation(api::mutations::SYNC_GOAL);
        states.push(mutation.state());

        use_hook(move || {
            let first = outcomes.clone();
            spawn(async move {
                let write = async move {
                    if plan == Plan::Fail {
                        return Err(ApiError::Network("offline".into()));
                    }
                    sleep(Duration::from_millis(20)).await;
                    Ok(1)
                };
                first.push(mutation.run(write).await);
            });
            if plan == Plan::Overlap {
                spawn(async move {
                    sleep(Duration::from_millis(5)).await;
                    outcomes.push(mutation.run(async { Ok(2) }).await);
                });
            }
        });
        rsx! {}
    }

    async fn drive(name: &str, plan: Plan) -> (Vec<MutationState>, Vec<Option<u32>>) {
        let states = Log::default();
        let outcomes = Log::default();
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                config: config_for(UNREACHABLE),
                tokens: scratch_store(name),
                plan,
                states: states.clone(),
                outcomes: outcomes.clone(),
            },
        );
        run_for(&mut dom, Duration::from_millis(300)).await;
        (states.all(), outcomes.all())
    }

    #[tokio::test]
    async fn test_success_shows_then_returns_to_idle() {
        let (states, outcomes) = drive("mutation_ok", Plan::Succeed).await;

        assert_eq!(outcomes, vec![Some(1)]);
        assert_eq!(states.first(), Some(&MutationState::Idle));
        assert!(states.contains(&MutationState::Pending));
        assert!(states.contains(&MutationState::Success));
        assert_eq!(states.last(), Some(&MutationState::Idle));
    }

    #[tokio::test]
    async fn test_second_run_while_pending_is_refused() {
        let (_, outcomes) = drive("mutation_overlap", Plan::Overlap).await;

        // The refusal resolves first; the original run still completes.
        assert_eq!(outcomes, vec![None, Some(1)]);
    }

    #[tokio::test]
    async fn test_failure_never_reports_success() {
        let (states, outcomes) = drive("mutation_err", Plan::Fail).await;

        assert_eq!(outcomes, vec![None]);
        assert!(!states.contains(&MutationState::Success));
        assert_eq!(
            states.last(),
            Some(&MutationState::Error(ApiError::Network("offline".into())))
        );
    }
}
