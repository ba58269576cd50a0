//! Profile: who you are, your numbers, your goal, and the way out.

use api::validate::{GOAL_MAX, GOAL_MIN};
use api::{keys, mutations, ProfileUpdate, UserProfile};
use dioxus::prelude::*;

use crate::components::{InlineError, StatsGrid};
use crate::hooks::{use_mutation, use_query};
use crate::icons::FaRightFromBracket;
use crate::session::use_session;
use crate::Icon;

#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let me = use_query(keys::me, |client| async move { client.me().await });
    let stats = use_query(keys::stats, |client| async move { client.stats().await });

    rsx! {
        div {
            class: "page",
            h1 { class: "page__title", "Profile" }

            match &*me.read_unchecked() {
                Some(Ok(user)) => rsx! {
                    UserCard { user: user.clone() }
                    GoalForm { current: user.goal().map(str::to_string) }
                },
                Some(Err(e)) => rsx! { InlineError { error: Some(e.clone()) } },
                None => rsx! { div { class: "placeholder", "Loading profile..." } },
            }

            match &*stats.read_unchecked() {
                Some(Ok(s)) => rsx! { StatsGrid { stats: s.clone() } },
                Some(Err(e)) => rsx! { InlineError { error: Some(e.clone()) } },
                None => rsx! {},
            }

            button {
                class: "button button--ghost button--block",
                onclick: move |_: MouseEvent| session.logout(),
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                " Log out"
            }
        }
    }
}

#[component]
fn UserCard(user: UserProfile) -> Element {
    let session = use_session();
    let update = use_mutation(mutations::UPDATE_PROFILE);
    let mut editing = use_signal(|| false);
    let mut username = use_signal(|| user.username.clone());
    let mut bio = use_signal(|| user.bio.clone().unwrap_or_default());

    let original = user.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let new_username = username().trim().to_string();
        let new_bio = bio().trim().to_string();
        let changes = ProfileUpdate {
            username: (new_username != original.username).then_some(new_username),
            bio: (original.bio.as_deref().unwrap_or("") != new_bio).then_some(new_bio),
        };
        if changes == ProfileUpdate::default() {
            editing.set(false);
            return;
        }
        let client = session.client();
        spawn(async move {
            if update.run(client.update_profile(&changes)).await.is_some() {
                editing.set(false);
            }
        });
    };

    let since = user.created_at.format("%B %Y").to_string();
    let saved = user.clone();

    if editing() {
        return rsx! {
            form {
                class: "card profile-card",
                onsubmit: handle_save,
                input {
                    class: "input",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                textarea {
                    class: "input",
                    rows: 3,
                    placeholder: "A few words about you",
                    value: bio(),
                    oninput: move |evt: FormEvent| bio.set(evt.value()),
                }
                div {
                    class: "profile-card__actions",
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_: MouseEvent| editing.set(false),
                        "Cancel"
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: update.is_pending(),
                        if update.is_pending() { "Saving..." } else { "Save" }
                    }
                }
                InlineError { error: update.error() }
            }
        };
    }

    rsx! {
        section {
            class: "card profile-card",
            h2 { class: "profile-card__name", "@{user.username}" }
            p { class: "profile-card__email", "{user.email}" }
            if let Some(bio) = &user.bio {
                p { class: "profile-card__bio", "{bio}" }
            }
            p { class: "profile-card__since", "Member since {since}" }
            button {
                class: "button button--ghost",
                onclick: move |_: MouseEvent| {
                    username.set(saved.username.clone());
                    bio.set(saved.bio.clone().unwrap_or_default());
                    editing.set(true);
                },
                "Edit profile"
            }
        }
    }
}

/// Sets the goal that matches and the feed are ranked against.
#[component]
fn GoalForm(current: Option<String>) -> Element {
    let session = use_session();
    let sync = use_mutation(mutations::SYNC_GOAL);
    let mut goal = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = session.client();
        spawn(async move {
            let text = goal();
            if sync.run(client.sync_goal(&text)).await.is_some() {
                goal.set(String::new());
            }
        });
    };

    rsx! {
        form {
            class: "card goal-form",
            onsubmit: handle_submit,
            h2 { class: "goal-form__title", "Current goal" }
            match current {
                Some(g) => rsx! { p { class: "goal-form__current", "{g}" } },
                None => rsx! { p { class: "goal-form__current goal-form__current--empty", "No goal yet. Set one to get matched." } },
            }
            textarea {
                class: "input",
                rows: 2,
                placeholder: "What are you working toward? ({GOAL_MIN}-{GOAL_MAX} characters)",
                value: goal(),
                oninput: move |evt: FormEvent| goal.set(evt.value()),
            }
            button {
                class: "button button--primary",
                r#type: "submit",
                disabled: sync.is_pending(),
                if sync.is_pending() { "Syncing..." } else if sync.is_success() { "Goal synced" } else { "Sync goal" }
            }
            InlineError { error: sync.error() }
        }
    }
}
