use std::time::Duration;

use api::{keys, mutations, MatchResult};
use dioxus::prelude::*;

use crate::components::{FeedbackForm, InlineError};
use crate::hooks::{use_mutation, use_query, Mutation};
use crate::icons::{FaBolt, FaHandshake};
use crate::platform::sleep;
use crate::session::{use_session, Session};
use crate::views::ModalOverlay;
use crate::Icon;

/// One match on the radar: who they are, how close, and what you can do.
#[component]
pub fn MatchCard(found: MatchResult) -> Element {
    let session = use_session();
    let connect = use_mutation(mutations::CONNECT);
    let mut impact = use_mutation(mutations::GIVE_IMPACT);
    let mut show_impact = use_signal(|| false);

    let user = found.user.clone();
    let status_id = user.id.clone();
    let fetch_id = user.id.clone();
    let status = use_query(
        move || keys::connection_status(&status_id),
        move |client| {
            let user_id = fetch_id.clone();
            async move { client.connection_status(&user_id).await }
        },
    );
    let connected = matches!(&*status.read(), Some(Ok(s)) if s.is_connected);

    let connect_id = user.id.clone();
    let on_connect = move |_: MouseEvent| {
        let client = session.client();
        let user_id = connect_id.clone();
        spawn(async move {
            connect.run(client.connect(&user_id, None)).await;
        });
    };

    let impact_id = user.id.clone();
    let on_feedback = move |feedback: String| {
        spawn(send_impact(session, impact, impact_id.clone(), feedback, show_impact));
    };

    let distance = match found.h3_distance {
        0 => "Same cell".to_string(),
        1 => "1 ring away".to_string(),
        n => format!("{n} rings away"),
    };
    let goal = user.current_goal.clone().unwrap_or_default();
    let username = user.username.clone();
    let bio = user.bio.clone();
    let impact_score = user.impact_score;
    let similarity = found.similarity_percentage;

    rsx! {
        article {
            class: "card match-card",
            header {
                class: "match-card__header",
                span { class: "match-card__name", "@{username}" }
                span { class: "badge", "{similarity:.0}%" }
            }
            if !goal.is_empty() {
                p { class: "match-card__goal", "{goal}" }
            }
            if let Some(bio) = &bio {
                p { class: "match-card__bio", "{bio}" }
            }
            div {
                class: "match-card__meta",
                span { "{distance}" }
                span {
                    Icon { icon: FaBolt, width: 12, height: 12 }
                    " {impact_score}"
                }
            }
            div {
                class: "match-card__actions",
                if connected {
                    span { class: "match-card__connected", "Connected" }
                } else {
                    button {
                        class: "button button--primary",
                        disabled: connect.is_pending(),
                        onclick: on_connect,
                        Icon { icon: FaHandshake, width: 14, height: 14 }
                        if connect.is_pending() { " Connecting..." } else { " Connect" }
                    }
                }
                button {
                    class: "button button--ghost",
                    onclick: move |_: MouseEvent| {
                        impact.reset();
                        show_impact.set(true);
                    },
                    "Give impact"
                }
            }
            InlineError { error: connect.error() }
        }

        if show_impact() {
            ModalOverlay {
                on_close: move |_| show_impact.set(false),
                div {
                    class: "modal-body",
                    h2 { class: "modal-title", "Impact for @{username}" }
                    FeedbackForm { mutation: impact, on_submit: on_feedback }
                }
            }
        }
    }
}

/// Give impact to `user_id` from the dialog behind `open`. After a success the
/// dialog keeps showing the confirmation for `success_reset_ms`, then closes.
async fn send_impact(
    session: Session,
    impact: Mutation,
    user_id: String,
    feedback: String,
    mut open: Signal<bool>,
) {
    let client = session.client();
    if impact.run(client.give_impact(&user_id, &feedback)).await.is_some() {
        sleep(Duration::from_millis(session.ui_config().success_reset_ms)).await;
        open.set(false);
    }
}
