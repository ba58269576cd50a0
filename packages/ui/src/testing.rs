//! Component test harness: a [`VirtualDom`] driven on the test's tokio runtime,
//! a session pointed at a mock backend, and a token store in a scratch directory.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
use dioxus::prelude::*;
use serde_json::json;
use store::{ClientConfig, FileStore};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::guard::{evaluate, GuardDecision, RouteKind};
use crate::session::{use_session, AuthState};

/// Access token for `user-1` that expires in 2100. The signature is not checked
/// client-side.
pub const TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJ1c2VyLTEiLCJleHAiOjQxMDI0NDQ4MDB9.sig";

pub fn profile_json() -> serde_json::Value {
    json!({
        "id": "user-1",
        "email": "ada@example.com",
        "username": "ada",
        "bio": null,
        "current_goal": "Learn Rust",
        "impact_score": 12,
        "created_at": "2024-05-01T09:00:00.000123"
    })
}

/// Config pointing at `server`, with a short success reset.
pub fn config(server: &MockServer) -> ClientConfig {
    config_for(&format!("{}/api/v1", server.uri()))
}

pub fn config_for(base_url: &str) -> ClientConfig {
    let mut config = ClientConfig::default().with_base_url(base_url);
    config.ui.success_reset_ms = 50;
    config
}

/// A token store in a fresh directory of its own.
pub fn scratch_store(name: &str) -> FileStore {
    let dir = std::env::temp_dir().join(format!("synapse_ui_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    FileStore::new(dir)
}

pub async fn mock_me(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Build the tree, then keep polling tasks and re-rendering for `window`.
pub async fn run_for(dom: &mut VirtualDom, window: Duration) {
    dom.rebuild_in_place();
    let deadline = tokio::time::Instant::now() + window;
    while tokio::time::Instant::now() < deadline {
        let _ = tokio::time::timeout_at(deadline, dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Values recorded by components under test, in order.
pub struct Log<T>(Rc<RefCell<Vec<T>>>);

impl<T> Default for Log<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }
}

impl<T> Clone for Log<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for Log<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Log<T> {
    pub fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub fn all(&self) -> Vec<T> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.0.borrow().last().cloned()
    }
}

/// Route guard as the router layouts apply it. Every auth state it renders
/// with is recorded in `seen`.
#[component]
pub fn Gate(kind: RouteKind, seen: Log<AuthState>, children: Element) -> Element {
    let state = use_session().state();
    seen.push(state.clone());
    match evaluate(kind, &state) {
        GuardDecision::Render => children,
        _ => rsx! {},
    }
}
