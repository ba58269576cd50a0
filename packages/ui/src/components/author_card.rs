use api::keys;
use dioxus::prelude::*;

use crate::components::InlineError;
use crate::hooks::use_query;
use crate::icons::FaBolt;
use crate::Icon;

/// Public profile of another user, loaded by id.
#[component]
pub fn AuthorCard(user_id: String) -> Element {
    let key_id = user_id.clone();
    let profile = use_query(
        move || keys::user(&key_id),
        move |client| {
            let user_id = user_id.clone();
            async move { client.user(&user_id).await }
        },
    );

    match &*profile.read_unchecked() {
        Some(Ok(user)) => {
            let username = user.username.clone();
            let impact_score = user.impact_score;
            rsx! {
                div {
                    class: "modal-body author-card",
                    h2 { class: "modal-title", "@{username}" }
                    if let Some(goal) = &user.current_goal {
                        p { class: "author-card__goal", "{goal}" }
                    }
                    if let Some(bio) = &user.bio {
                        p { class: "author-card__bio", "{bio}" }
                    }
                    span {
                        class: "badge",
                        Icon { icon: FaBolt, width: 12, height: 12 }
                        " {impact_score}"
                    }
                }
            }
        }
        Some(Err(e)) => rsx! { InlineError { error: Some(e.clone()) } },
        None => rsx! { div { class: "placeholder", "Loading..." } },
    }
}
