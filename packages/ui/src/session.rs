//! Session context: who is signed in, and the client and cache that act for them.
//!
//! [`SessionProvider`] restores the stored credential on mount, checks it
//! against `GET /auth/me`, and hands every descendant a [`Session`]. A 401
//! anywhere ends the session; login and logout both clear the query cache so
//! one user never sees another's data.

use api::{keys, ApiClient, ApiError, AuthContext, Credential, RegisterRequest, UserProfile};
use dioxus::prelude::*;
use query::QueryCache;
use store::{ClientConfig, TokenStore, UiConfig};

use crate::platform::{token_store, PlatformTokenStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// The stored credential is being checked.
    Loading,
    Unauthenticated,
    /// A credential is held; `user` is filled in once `/auth/me` answers.
    Authenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<UserProfile>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            status: AuthStatus::Loading,
            user: None,
        }
    }
}

impl AuthState {
    fn signed_out() -> Self {
        Self {
            status: AuthStatus::Unauthenticated,
            user: None,
        }
    }

    fn signed_in(user: Option<UserProfile>) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            user,
        }
    }
}

#[derive(Clone)]
struct Services {
    client: ApiClient,
    cache: QueryCache,
    config: ClientConfig,
    tokens: PlatformTokenStore,
}

/// Copyable handle to the current session.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    state: Signal<AuthState>,
    services: CopyValue<Services>,
}

/// Get the session provided by [`SessionProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}

impl Session {
    /// Current auth state. Reading it subscribes the calling component.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn client(&self) -> ApiClient {
        self.services.read().client.clone()
    }

    pub fn cache(&self) -> QueryCache {
        self.services.read().cache.clone()
    }

    pub fn ui_config(&self) -> UiConfig {
        self.services.read().config.ui.clone()
    }

    fn tokens(&self) -> PlatformTokenStore {
        self.services.read().tokens.clone()
    }

    /// Sign in with email and password, persist the token and load the profile.
    ///
    /// A profile that fails to load is reported as an error even though the
    /// credential is kept.
    pub async fn login(mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let credential = self.client().sign_in(email, password).await?;
        if let Err(e) = self.tokens().set(credential.token()).await {
            tracing::warn!(error = %e, "could not persist credential, session will not survive a reload");
        }
        self.cache().clear();
        self.state.set(AuthState::signed_in(None));
        self.load_user().await
    }

    /// Create an account, then sign in with it.
    pub async fn register(self, request: RegisterRequest) -> Result<(), ApiError> {
        let user = self.client().register(&request).await?;
        tracing::info!(user = %user.id, "registered");
        self.login(&request.email, &request.password).await
    }

    pub fn logout(self) {
        self.end_session("signed out");
    }

    /// End the session after the server rejected our credential.
    pub(crate) fn expire(self) {
        if self.state.peek().status == AuthStatus::Unauthenticated {
            return;
        }
        self.end_session("credential rejected, signing out");
    }

    fn end_session(mut self, reason: &'static str) {
        self.client().sign_out();
        tracing::info!("{reason}");
        // The caller is usually a page that unmounts once signed out, so the
        // removal belongs to the root scope rather than the caller's.
        let tokens = self.tokens();
        spawn_forever(async move {
            if let Err(e) = tokens.remove().await {
                tracing::warn!(error = %e, "could not remove stored credential");
            }
        });
        self.state.set(AuthState::signed_out());
        self.cache().clear();
    }

    async fn restore(mut self) {
        let stored = self.tokens().get().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read stored credential");
            None
        });
        let Some(token) = stored else {
            self.state.set(AuthState::signed_out());
            return;
        };

        match Credential::parse(token) {
            Ok(credential) if !credential.is_expired() => {
                self.client().auth().sign_in(credential);
                // Failures are logged and reflected in the state.
                let _ = self.load_user().await;
            }
            Ok(_) => self.end_session("stored credential expired"),
            Err(e) => {
                tracing::warn!(error = %e, "stored credential is unreadable");
                self.end_session("stored credential unreadable");
            }
        }
    }

    async fn load_user(mut self) -> Result<(), ApiError> {
        let client = self.client();
        let result = self
            .cache()
            .query(keys::me(), move || async move { client.me().await })
            .await;
        match result {
            Ok(user) => {
                self.state.set(AuthState::signed_in(Some(user)));
                Ok(())
            }
            Err(e) if e.is_unauthorized() => {
                self.expire();
                Err(e)
            }
            Err(e) => {
                // Offline or server trouble: keep the credential, pages will retry.
                tracing::warn!(error = %e, "could not load profile");
                self.state.set(AuthState::signed_in(None));
                Err(e)
            }
        }
    }
}

/// Provider component that owns the session.
/// Wrap your router with this component.
///
/// `tokens` defaults to the platform's store.
#[component]
pub fn SessionProvider(
    config: ClientConfig,
    #[props(default = token_store())] tokens: PlatformTokenStore,
    children: Element,
) -> Element {
    let state = use_signal(AuthState::default);
    let services = use_hook(move || {
        let client = ApiClient::new(config.api.base_url.clone(), AuthContext::new());
        tracing::info!(base_url = client.base_url(), "API client ready");
        CopyValue::new(Services {
            client,
            cache: QueryCache::new(),
            config,
            tokens,
        })
    });
    let session = use_context_provider(|| Session { state, services });

    use_hook(move || spawn(session.restore()));

    rsx! {
        {children}
    }
}
