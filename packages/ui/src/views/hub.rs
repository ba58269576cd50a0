//! Hub: stats, a composer, and the feed ranked against the user's goal.

use api::validate::POST_MAX;
use api::{keys, mutations, FeedResponse};
use dioxus::prelude::*;

use crate::components::{InlineError, PostCard, StatsGrid};
use crate::hooks::{use_mutation, use_query};
use crate::session::use_session;
use crate::views::segmented_class;

#[component]
pub fn HubView() -> Element {
    let session = use_session();
    let limit = session.ui_config().feed_limit;
    let mut recent = use_signal(|| false);

    let stats = use_query(keys::stats, |client| async move { client.stats().await });
    let feed = use_query(
        move || {
            if recent() {
                keys::feed_recent(limit)
            } else {
                keys::feed(limit)
            }
        },
        move |client| {
            let recent = recent();
            async move {
                if recent {
                    client.recent_posts(limit).await.map(|posts| FeedResponse {
                        total_count: posts.len() as i64,
                        curated_by: "Most recent".to_string(),
                        posts,
                    })
                } else {
                    client.feed(limit).await
                }
            }
        },
    );

    rsx! {
        div {
            class: "page",
            h1 { class: "page__title", "Hub" }

            match &*stats.read_unchecked() {
                Some(Ok(s)) => rsx! { StatsGrid { stats: s.clone() } },
                Some(Err(e)) => rsx! { InlineError { error: Some(e.clone()) } },
                None => rsx! { div { class: "placeholder", "Loading stats..." } },
            }

            Composer {}

            div {
                class: "segmented",
                button {
                    class: segmented_class(!recent()),
                    onclick: move |_: MouseEvent| recent.set(false),
                    "For you"
                }
                button {
                    class: segmented_class(recent()),
                    onclick: move |_: MouseEvent| recent.set(true),
                    "Recent"
                }
            }

            match &*feed.read_unchecked() {
                Some(Ok(feed)) => {
                    let curated_by = feed.curated_by.clone();
                    rsx! {
                        p { class: "feed__curated", "{curated_by}" }
                        if feed.posts.is_empty() {
                            div { class: "placeholder", "No posts yet. Be the first to share progress." }
                        }
                        for post in feed.posts.iter().cloned() {
                            PostCard { key: "{post.id}", post: post }
                        }
                    }
                }
                Some(Err(e)) => rsx! { InlineError { error: Some(e.clone()) } },
                None => rsx! { div { class: "placeholder", "Loading feed..." } },
            }
        }
    }
}

#[component]
fn Composer() -> Element {
    let session = use_session();
    let create = use_mutation(mutations::CREATE_POST);
    let mut content = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = session.client();
        spawn(async move {
            let text = content();
            if create.run(client.create_post(&text)).await.is_some() {
                content.set(String::new());
            }
        });
    };

    let count = content.read().trim().chars().count();

    rsx! {
        form {
            class: "card composer",
            onsubmit: handle_submit,
            textarea {
                class: "input composer__input",
                rows: 3,
                placeholder: "Share what you are working on",
                value: content(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }
            div {
                class: "composer__footer",
                span { class: "composer__counter", "{count}/{POST_MAX}" }
                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: create.is_pending(),
                    if create.is_pending() { "Posting..." } else if create.is_success() { "Posted" } else { "Post" }
                }
            }
            InlineError { error: create.error() }
        }
    }
}
