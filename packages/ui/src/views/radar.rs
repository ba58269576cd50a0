//! Radar: share a location, pick a search radius, browse matches.

use api::{keys, mutations, validate, ApiError};
use dioxus::prelude::*;

use crate::components::{InlineError, MatchCard};
use crate::hooks::{use_mutation, use_query};
use crate::icons::FaLocationDot;
use crate::session::use_session;
use crate::views::segmented_class;
use crate::Icon;

/// Ring counts offered by the selector. One ring is the neighbouring cells.
const RING_CHOICES: [u8; 3] = [1, 2, 3];

#[component]
pub fn RadarView() -> Element {
    let session = use_session();
    let ui = session.ui_config();
    let limit = ui.match_limit;
    let mut rings = use_signal(|| ui.rings());

    let matches = use_query(
        move || keys::matches(rings(), limit),
        move |client| {
            let rings = rings();
            async move { client.matches(rings, limit).await }
        },
    );

    rsx! {
        div {
            class: "page",
            h1 { class: "page__title", "Radar" }

            LocationForm {}

            div {
                class: "segmented",
                for choice in RING_CHOICES {
                    button {
                        key: "{choice}",
                        class: segmented_class(rings() == choice),
                        onclick: move |_: MouseEvent| rings.set(choice),
                        if choice == 1 { "1 ring" } else { "{choice} rings" }
                    }
                }
            }

            match &*matches.read_unchecked() {
                Some(Ok(found)) if !found.has_location() => rsx! {
                    div { class: "placeholder", "Share your location to see who is nearby." }
                },
                Some(Ok(found)) if found.matches.is_empty() => rsx! {
                    div { class: "placeholder", "No matches in range. Try a wider radius." }
                },
                Some(Ok(found)) => rsx! {
                    p { class: "radar__count", "{found.total_count} people nearby" }
                    for m in found.matches.iter().cloned() {
                        MatchCard { key: "{m.user.id}", found: m }
                    }
                },
                Some(Err(e)) => rsx! { InlineError { error: Some(e.clone()) } },
                None => rsx! { div { class: "placeholder", "Scanning..." } },
            }
        }
    }
}

#[component]
fn LocationForm() -> Element {
    let session = use_session();
    let update = use_mutation(mutations::UPDATE_LOCATION);
    let mut latitude = use_signal(String::new);
    let mut longitude = use_signal(String::new);
    let mut invalid = use_signal(|| Option::<ApiError>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        invalid.set(None);
        let parsed = validate::parse_coordinate("Latitude", &latitude()).and_then(|lat| {
            validate::parse_coordinate("Longitude", &longitude()).map(|lng| (lat, lng))
        });
        let (lat, lng) = match parsed {
            Ok(coords) => coords,
            Err(e) => {
                invalid.set(Some(e.into()));
                return;
            }
        };
        let client = session.client();
        spawn(async move {
            update.run(client.update_location(lat, lng)).await;
        });
    };

    rsx! {
        form {
            class: "card location-form",
            onsubmit: handle_submit,
            div {
                class: "location-form__fields",
                input {
                    class: "input",
                    inputmode: "decimal",
                    placeholder: "Latitude",
                    value: latitude(),
                    oninput: move |evt: FormEvent| latitude.set(evt.value()),
                }
                input {
                    class: "input",
                    inputmode: "decimal",
                    placeholder: "Longitude",
                    value: longitude(),
                    oninput: move |evt: FormEvent| longitude.set(evt.value()),
                }
                button {
                    class: "button button--primary",
                    r#type: "submit",
                    disabled: update.is_pending(),
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    if update.is_pending() { " Saving..." } else if update.is_success() { " Saved" } else { " Set location" }
                }
            }
            InlineError { error: invalid().or(update.error()) }
        }
    }
}
