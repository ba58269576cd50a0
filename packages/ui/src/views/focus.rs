//! Focus: start a session against a goal, watch the clock, end it.
//!
//! The elapsed time is derived from the session's `start_time` and the wall
//! clock on every tick, never counted up, so a throttled background tab shows
//! the right value as soon as it wakes.

use std::time::Duration;

use api::validate::{GOAL_MAX, GOAL_MIN};
use api::{keys, mutations, FocusSession};
use dioxus::prelude::*;

use crate::components::InlineError;
use crate::hooks::{use_mutation, use_now, use_query};
use crate::session::use_session;

#[component]
pub fn FocusView() -> Element {
    let current = use_query(keys::focus_current, |client| async move {
        client.focus_current().await
    });

    rsx! {
        div {
            class: "page",
            h1 { class: "page__title", "Focus" }
            match &*current.read_unchecked() {
                Some(Ok(Some(focus))) if focus.is_active => rsx! {
                    ActiveSession { focus: focus.clone() }
                },
                Some(Ok(_)) => rsx! { StartForm {} },
                Some(Err(e)) => rsx! { InlineError { error: Some(e.clone()) } },
                None => rsx! { div { class: "placeholder", "Loading..." } },
            }
        }
    }
}

#[component]
fn ActiveSession(focus: FocusSession) -> Element {
    let session = use_session();
    let now = use_now(Duration::from_millis(session.ui_config().focus_tick_ms));
    let end = use_mutation(mutations::END_FOCUS);

    let minutes = focus.elapsed_minutes_at(now());
    let label = elapsed_label(minutes);
    let started = focus.start_time.format("%H:%M").to_string();

    rsx! {
        section {
            class: "card focus-active",
            p { class: "focus-active__goal", "{focus.goal}" }
            p { class: "focus-active__clock", "{label}" }
            p { class: "focus-active__since", "Started at {started} UTC" }
            button {
                class: "button button--danger button--block",
                disabled: end.is_pending(),
                onclick: move |_: MouseEvent| {
                    let client = session.client();
                    spawn(async move {
                        end.run(client.end_focus()).await;
                    });
                },
                if end.is_pending() { "Ending..." } else { "End session" }
            }
            InlineError { error: end.error() }
        }
    }
}

#[component]
fn StartForm() -> Element {
    let session = use_session();
    let start = use_mutation(mutations::START_FOCUS);
    let mut goal = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = session.client();
        spawn(async move {
            let text = goal();
            if start.run(client.start_focus(&text)).await.is_some() {
                goal.set(String::new());
            }
        });
    };

    // Between a successful start and the refetch that replaces this form.
    let locked = start.is_pending() || start.is_success();

    rsx! {
        form {
            class: "card focus-start",
            onsubmit: handle_submit,
            label { r#for: "focus-goal", "What will you focus on?" }
            input {
                id: "focus-goal",
                class: "input",
                placeholder: "{GOAL_MIN}-{GOAL_MAX} characters",
                maxlength: GOAL_MAX as i64,
                value: goal(),
                oninput: move |evt: FormEvent| goal.set(evt.value()),
            }
            button {
                class: "button button--primary button--block",
                r#type: "submit",
                disabled: locked,
                if locked { "Starting..." } else { "Start focus" }
            }
            InlineError { error: start.error() }
        }
    }
}

/// `42 min`, or `1 h 05 min` past the hour.
fn elapsed_label(minutes: i64) -> String {
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} h {:02} min", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_label() {
        assert_eq!(elapsed_label(0), "0 min");
        assert_eq!(elapsed_label(59), "59 min");
        assert_eq!(elapsed_label(60), "1 h 00 min");
        assert_eq!(elapsed_label(125), "2 h 05 min");
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod rendered {
        use std::time::Duration;

        use chrono::Utc;
        use dioxus::dioxus_core::VirtualDom;
        use dioxus::prelude::*;
        use serde_json::json;
        use store::{ClientConfig, FileStore, TokenStore};
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        use super::super::FocusView;
        use crate::guard::RouteKind;
        use crate::session::{AuthState, SessionProvider};
        use crate::testing::{config, mock_me, profile_json, run_for, scratch_store, Gate, Log, TOKEN};

        #[component]
        fn App(config: ClientConfig, tokens: FileStore, seen: Log<AuthState>) -> Element {
            rsx! {
                SessionProvider {
                    config: config,
                    tokens: tokens,
                    Gate { kind: RouteKind::Protected, seen: seen, FocusView {} }
                }
            }
        }

        /// Render the focus page against a backend whose current session is `current`.
        async fn render(name: &str, current: serde_json::Value) -> String {
            let server = MockServer::start().await;
            mock_me(&server, ResponseTemplate::new(200).set_body_json(profile_json())).await;
            Mock::given(method("GET"))
                .and(path("/api/v1/users/focus/current"))
                .respond_with(ResponseTemplate::new(200).set_body_json(current))
                .mount(&server)
                .await;
            let tokens = scratch_store(name);
            tokens.set(TOKEN).await.unwrap();

            let mut dom = VirtualDom::new_with_props(
                App,
                AppProps {
                    config: config(&server),
                    tokens,
                    seen: Log::default(),
                },
            );
            run_for(&mut dom, Duration::from_millis(500)).await;
            dioxus_ssr::render(&dom)
        }

        #[tokio::test]
        async fn test_no_active_session_shows_only_the_start_form() {
            let html = render("focus_idle", serde_json::Value::Null).await;

            assert!(html.contains("Start focus"), "{html}");
            assert!(!html.contains("End session"), "{html}");
        }

        #[tokio::test]
        async fn test_active_session_hides_the_start_form() {
            let started = Utc::now() - chrono::Duration::minutes(90);
            let html = render(
                "focus_active",
                json!({
                    "id": "focus-1",
                    "goal": "Write the parser",
                    "start_time": started.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
                    "end_time": null,
                    "duration_minutes": null,
                    "is_active": true
                }),
            )
            .await;

            assert!(html.contains("Write the parser"), "{html}");
            assert!(html.contains("1 h 30 min"), "{html}");
            assert!(html.contains("End session"), "{html}");
            assert!(!html.contains("Start focus"), "{html}");
        }
    }
}
