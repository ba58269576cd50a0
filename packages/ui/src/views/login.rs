//! Sign-in and registration, on one page with a toggle.

use api::{validate, ApiError, RegisterRequest};
use dioxus::prelude::*;

use crate::components::InlineError;
use crate::session::use_session;

#[component]
pub fn LoginView() -> Element {
    let session = use_session();
    let mut registering = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<ApiError>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        spawn(async move {
            error.set(None);
            let e = email().trim().to_lowercase();
            let p = password();

            let result = if registering() {
                if let Err(v) = validate::password_confirmation(&p, &confirm_password()) {
                    error.set(Some(v.into()));
                    return;
                }
                let request = RegisterRequest {
                    email: e,
                    username: username().trim().to_string(),
                    password: p,
                    bio: None,
                };
                loading.set(true);
                session.register(request).await
            } else {
                if let Err(v) = validate::email(&e) {
                    error.set(Some(v.into()));
                    return;
                }
                loading.set(true);
                session.login(&e, &p).await
            };

            // On success the route guard takes over and leaves this page.
            loading.set(false);
            if let Err(e) = result {
                error.set(Some(e));
            }
        });
    };

    let (title, submit, busy) = if registering() {
        ("Create your account", "Sign up", "Creating account...")
    } else {
        ("Welcome back", "Sign in", "Signing in...")
    };
    let (toggle_hint, toggle_label) = if registering() {
        ("Already have an account?", "Sign in")
    } else {
        ("New to Synapse?", "Create an account")
    };
    let (password_hint, password_autocomplete) = if registering() {
        ("Password (min 8 characters)", "new-password")
    } else {
        ("Password", "current-password")
    };

    rsx! {
        div {
            class: "login-page",
            h1 { class: "login-page__brand", "Synapse" }
            p { class: "login-page__tagline", "Find the people working toward what you are." }

            form {
                class: "card login-form",
                onsubmit: handle_submit,
                h2 { class: "login-form__title", "{title}" }

                InlineError { error: error() }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                if registering() {
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Username (3-100 characters)",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: password_hint,
                    autocomplete: password_autocomplete,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                if registering() {
                    input {
                        class: "input",
                        r#type: "password",
                        placeholder: "Confirm password",
                        autocomplete: "new-password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                button {
                    class: "button button--primary button--block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "{busy}" } else { "{submit}" }
                }
            }

            p {
                class: "login-page__toggle",
                "{toggle_hint} "
                button {
                    class: "link",
                    r#type: "button",
                    onclick: move |_: MouseEvent| {
                        error.set(None);
                        registering.set(!registering());
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}
