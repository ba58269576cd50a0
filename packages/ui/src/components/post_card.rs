use api::{mutations, Post, UserProfile};
use dioxus::prelude::*;

use crate::components::{AuthorCard, FeedbackForm};
use crate::hooks::use_mutation;
use crate::icons::FaBolt;
use crate::session::use_session;
use crate::views::ModalOverlay;
use crate::Icon;

/// A feed post with its own impact feedback form.
#[component]
pub fn PostCard(post: Post) -> Element {
    let session = use_session();
    let impact = use_mutation(mutations::IMPACT_POST);
    let mut open = use_signal(|| false);
    let mut show_author = use_signal(|| false);

    let post_id = post.id.clone();
    let on_feedback = move |feedback: String| {
        let client = session.client();
        let post_id = post_id.clone();
        spawn(async move {
            impact.run(client.impact_post(&post_id, &feedback)).await;
        });
    };

    let viewer = session.state().user;
    let can_impact = accepts_impact_from(&post, viewer.as_ref());
    let author = post.author().to_string();
    let author_id = post.author_id.clone();
    let content = post.content.clone();
    let impact_count = post.impact_count;
    let posted = post.created_at.format("%b %-d, %H:%M").to_string();
    let card_class = if impact.is_success() {
        "card post-card post-card--impacted"
    } else {
        "card post-card"
    };

    rsx! {
        article {
            class: card_class,
            header {
                class: "post-card__header",
                button {
                    class: "post-card__author post-card__author--link",
                    r#type: "button",
                    onclick: move |_: MouseEvent| show_author.set(true),
                    "@{author}"
                }
                span { class: "post-card__time", "{posted}" }
                if let Some(score) = post.similarity_score {
                    span { class: "badge", "{score:.0}% match" }
                }
            }
            p { class: "post-card__content", "{content}" }
            footer {
                class: "post-card__footer",
                span {
                    class: "post-card__impact",
                    Icon { icon: FaBolt, width: 12, height: 12 }
                    " {impact_count}"
                }
                if post.is_impacted_by_me {
                    span { class: "post-card__mine", "You gave impact" }
                } else if can_impact && !open() {
                    button {
                        class: "button button--ghost",
                        onclick: move |_: MouseEvent| open.set(true),
                        "Give impact"
                    }
                }
            }
            if open() && can_impact {
                FeedbackForm { mutation: impact, on_submit: on_feedback }
            }
        }

        if show_author() {
            ModalOverlay {
                on_close: move |_| show_author.set(false),
                AuthorCard { user_id: author_id }
            }
        }
    }
}

/// Impact can be given once, and never to your own post.
fn accepts_impact_from(post: &Post, viewer: Option<&UserProfile>) -> bool {
    !post.is_impacted_by_me && viewer.map_or(true, |user| user.id != post.author_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(author_id: &str, impacted: bool) -> Post {
        Post {
            id: "post-1".into(),
            author_id: author_id.into(),
            author_username: Some("grace".into()),
            content: "Shipped the parser".into(),
            impact_count: 0,
            created_at: Utc::now(),
            similarity_score: None,
            is_impacted_by_me: impacted,
        }
    }

    fn viewer(id: &str) -> UserProfile {
        UserProfile {
            id: id.into(),
            email: "ada@example.com".into(),
            username: "ada".into(),
            bio: None,
            current_goal: None,
            impact_score: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_own_post_offers_no_impact() {
        assert!(!accepts_impact_from(&post("user-1", false), Some(&viewer("user-1"))));
        assert!(accepts_impact_from(&post("user-2", false), Some(&viewer("user-1"))));
    }

    #[test]
    fn test_impact_is_given_once() {
        assert!(!accepts_impact_from(&post("user-2", true), Some(&viewer("user-1"))));
        // Profile not loaded yet: the backend still has the final word.
        assert!(accepts_impact_from(&post("user-2", false), None));
    }
}
