//! # Authentication context
//!
//! The bearer token is not ambient state: it lives in an [`AuthContext`] that is
//! handed to [`ApiClient::new`](crate::ApiClient::new), and every clone of the
//! context observes the same sign-in and sign-out.
//!
//! A [`Credential`] is the raw access token plus the claims the client can read
//! without the signing key: the subject and the `exp` expiry. The signature is
//! the server's business; the client only uses `exp` to stop presenting a token
//! it knows the server will reject.

use std::cell::RefCell;
use std::rc::Rc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::ApiError;

#[derive(Deserialize)]
struct Claims {
    sub: Option<String>,
    exp: Option<i64>,
}

/// An access token and its readable claims.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    token: String,
    subject: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    /// Parse a JWT access token. Fails if the payload segment is not base64 JSON.
    pub fn parse(token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into();
        let payload = token
            .split('.')
            .nth(1)
            .ok_or_else(|| ApiError::Decode("access token is not a JWT".to_string()))?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| ApiError::Decode(format!("access token payload: {e}")))?;
        let claims: Claims = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("access token claims: {e}")))?;

        Ok(Self {
            expires_at: claims.exp.and_then(|secs| DateTime::from_timestamp(secs, 0)),
            subject: claims.sub,
            token,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The user id the token was issued for.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// A token without `exp` never expires client-side.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Shared holder of the current credential.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    credential: Rc<RefCell<Option<Credential>>>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.credential, &other.credential)
    }
}

impl AuthContext {
    /// A context with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context restored from a persisted credential. Expired credentials are
    /// discarded.
    pub fn with_credential(credential: Credential) -> Self {
        let ctx = Self::new();
        ctx.sign_in(credential);
        ctx
    }

    pub fn sign_in(&self, credential: Credential) {
        if credential.is_expired() {
            tracing::info!("ignoring expired credential");
            return;
        }
        *self.credential.borrow_mut() = Some(credential);
    }

    pub fn sign_out(&self) -> Option<Credential> {
        self.credential.borrow_mut().take()
    }

    /// The current credential, if present and not expired. An expired credential
    /// is dropped on the way.
    pub fn credential(&self) -> Option<Credential> {
        let mut slot = self.credential.borrow_mut();
        if slot.as_ref().is_some_and(Credential::is_expired) {
            tracing::info!("credential expired, signing out");
            *slot = None;
        }
        slot.clone()
    }

    pub fn bearer(&self) -> Option<String> {
        self.credential().map(|c| c.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }
}
