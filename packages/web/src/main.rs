use dioxus::prelude::*;

use store::ClientConfig;
use ui::SessionProvider;
use views::{Focus, Hub, Login, NotFound, Profile, ProtectedLayout, PublicLayout, Radar};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(PublicLayout)]
        #[route("/login")]
        Login {},
    #[end_layout]
    #[layout(ProtectedLayout)]
        #[route("/hub")]
        Hub {},
        #[route("/radar")]
        Radar {},
        #[route("/focus")]
        Focus {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Build-time client configuration.
const CONFIG_TOML: &str = include_str!("../Synapse.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(load_config().log.level()) {
        eprintln!("logger already initialized: {e}");
    }
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    let config = ClientConfig::load(CONFIG_TOML);
    match option_env!("SYNAPSE_API_URL") {
        Some(url) if !url.trim().is_empty() => {
            tracing::debug!(url, "API base URL overridden at build time");
            config.with_base_url(url.trim())
        }
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Title { "Synapse" }
        document::Link { rel: "stylesheet", href: ui::SYNAPSE_CSS }

        SessionProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the hub; the guard sends signed-out visitors on to login.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Hub {});
    rsx! {}
}
