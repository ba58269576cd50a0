//! # HTTP client for the Synapse REST API
//!
//! [`ApiClient`] owns a `reqwest::Client`, the API base URL and an [`AuthContext`].
//! Each endpoint is one typed method. Authenticated endpoints refuse to go out
//! without a valid credential ([`ApiError::Unauthenticated`]), and inputs with
//! client-side limits are checked by [`validate`](crate::validate) before the
//! request is built, so a rejected input never reaches the network.
//!
//! No retries, no timeouts: a failed request is reported once to its caller.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::auth::{AuthContext, Credential};
use crate::error::error_message;
use crate::models::*;
use crate::{validate, ApiError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Public,
    Authenticated,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    auth: AuthContext,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.auth == other.auth
    }
}

impl ApiClient {
    /// `base_url` includes the API prefix, e.g. `http://localhost:8000/api/v1`.
    pub fn new(base_url: impl Into<String>, auth: AuthContext) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            auth,
        }
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, access: Access) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match access {
            Access::Public => Ok(builder),
            Access::Authenticated => {
                let token = self.auth.bearer().ok_or(ApiError::Unauthenticated)?;
                Ok(builder.bearer_auth(token))
            }
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        access: Access,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!(%method, path, "API request");
        let builder = build(self.request(method.clone(), path, access)?);

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "API request failed to send");
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            tracing::warn!(%method, path, status = status.as_u16(), %message, "API request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "API response did not decode");
            ApiError::Decode(e.to_string())
        })
    }

    // ---- auth ----

    /// Exchange email and password for an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        let body = LoginRequest {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };
        self.call(Method::POST, "/auth/login", Access::Public, |b| b.json(&body))
            .await
    }

    /// Log in and install the resulting credential into this client's context.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Credential, ApiError> {
        let token = self.login(email, password).await?;
        let credential = Credential::parse(token.access_token)?;
        self.auth.sign_in(credential.clone());
        tracing::info!(user = ?credential.subject(), "signed in");
        Ok(credential)
    }

    pub fn sign_out(&self) {
        if self.auth.sign_out().is_some() {
            tracing::info!("signed out");
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        validate::email(&request.email)?;
        validate::username(&request.username)?;
        validate::password(&request.password)?;
        self.call(Method::POST, "/auth/register", Access::Public, |b| b.json(request))
            .await
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.call(Method::GET, "/auth/me", Access::Authenticated, |b| b)
            .await
    }

    // ---- users ----

    pub async fn stats(&self) -> Result<UserStats, ApiError> {
        self.call(Method::GET, "/users/stats", Access::Authenticated, |b| b)
            .await
    }

    /// Set the goal that drives matching and feed curation.
    pub async fn sync_goal(&self, goal: &str) -> Result<SyncGoalResponse, ApiError> {
        validate::goal(goal)?;
        let body = SyncGoalRequest {
            goal: goal.trim().to_string(),
        };
        self.call(Method::POST, "/users/sync-goal", Access::Authenticated, |b| b.json(&body))
            .await
    }

    pub async fn update_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<UpdateLocationResponse, ApiError> {
        validate::coordinates(latitude, longitude)?;
        let body = UpdateLocationRequest {
            latitude,
            longitude,
        };
        self.call(Method::POST, "/users/update-location", Access::Authenticated, |b| b.json(&body))
            .await
    }

    /// Edit bio and/or username. The backend takes these as query parameters.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        if let Some(username) = &update.username {
            validate::username(username)?;
        }
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(bio) = &update.bio {
            params.push(("bio", bio.trim().to_string()));
        }
        if let Some(username) = &update.username {
            params.push(("username", username.trim().to_string()));
        }
        self.call(Method::PUT, "/users/me", Access::Authenticated, |b| b.query(&params))
            .await
    }

    pub async fn user(&self, user_id: &str) -> Result<UserPublic, ApiError> {
        self.call(Method::GET, &format!("/users/{user_id}"), Access::Authenticated, |b| b)
            .await
    }

    // ---- focus ----

    /// The active focus session, or `None` if there is none.
    pub async fn focus_current(&self) -> Result<Option<FocusSession>, ApiError> {
        self.call(Method::GET, "/users/focus/current", Access::Authenticated, |b| b)
            .await
    }

    pub async fn start_focus(&self, goal: &str) -> Result<FocusSession, ApiError> {
        validate::goal(goal)?;
        let body = FocusSessionStart {
            goal: goal.trim().to_string(),
        };
        self.call(Method::POST, "/users/focus/start", Access::Authenticated, |b| b.json(&body))
            .await
    }

    pub async fn end_focus(&self) -> Result<FocusSession, ApiError> {
        self.call(Method::POST, "/users/focus/end", Access::Authenticated, |b| b)
            .await
    }

    // ---- matching ----

    pub async fn matches(&self, rings: u8, limit: u32) -> Result<MatchesResponse, ApiError> {
        self.call(Method::GET, "/matching/matches", Access::Authenticated, |b| {
            b.query(&[("rings", rings.to_string()), ("limit", limit.to_string())])
        })
        .await
    }

    /// Give impact feedback to another user.
    pub async fn give_impact(
        &self,
        to_user_id: &str,
        feedback: &str,
    ) -> Result<ImpactResponse, ApiError> {
        validate::feedback(feedback)?;
        let body = ImpactRequest {
            to_user_id: to_user_id.to_string(),
            feedback_content: feedback.trim().to_string(),
        };
        self.call(Method::POST, "/matching/impact", Access::Authenticated, |b| b.json(&body))
            .await
    }

    pub async fn connect(
        &self,
        to_user_id: &str,
        message: Option<String>,
    ) -> Result<ConnectResponse, ApiError> {
        let body = ConnectRequest {
            to_user_id: to_user_id.to_string(),
            message: message.filter(|m| !m.trim().is_empty()),
        };
        self.call(Method::POST, "/matching/connect", Access::Authenticated, |b| b.json(&body))
            .await
    }

    pub async fn connection_status(&self, user_id: &str) -> Result<ConnectionStatus, ApiError> {
        let path = format!("/matching/connection-status/{user_id}");
        self.call(Method::GET, &path, Access::Authenticated, |b| b)
            .await
    }

    // ---- feed ----

    /// The feed ranked against the user's current goal.
    pub async fn feed(&self, limit: u32) -> Result<FeedResponse, ApiError> {
        self.call(Method::GET, "/feed", Access::Authenticated, |b| {
            b.query(&[("limit", limit.to_string())])
        })
        .await
    }

    /// Newest posts first, not curated.
    pub async fn recent_posts(&self, limit: u32) -> Result<Vec<Post>, ApiError> {
        self.call(Method::GET, "/feed/recent", Access::Authenticated, |b| {
            b.query(&[("limit", limit.to_string())])
        })
        .await
    }

    pub async fn create_post(&self, content: &str) -> Result<Post, ApiError> {
        validate::post_content(content)?;
        let body = PostCreate {
            content: content.trim().to_string(),
        };
        self.call(Method::POST, "/feed/posts", Access::Authenticated, |b| b.json(&body))
            .await
    }

    /// Give impact feedback on a post. The feedback travels as a query parameter.
    pub async fn impact_post(
        &self,
        post_id: &str,
        feedback: &str,
    ) -> Result<PostImpactResponse, ApiError> {
        validate::feedback(feedback)?;
        let path = format!("/feed/posts/{post_id}/impact");
        let feedback = feedback.trim().to_string();
        self.call(Method::POST, &path, Access::Authenticated, |b| {
            b.query(&[("feedback", feedback)])
        })
        .await
    }
}
