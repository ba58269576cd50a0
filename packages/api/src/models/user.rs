//! # User, session and profile models
//!
//! [`UserProfile`] is the signed-in user as returned by `GET /auth/me`; it is the
//! only user record that carries an email. [`UserPublic`] is the projection other
//! users see in matches. The remaining types are request/response bodies for the
//! `/auth` and `/users` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// The signed-in user's own profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub username: String,
    pub bio: Option<String>,
    pub current_goal: Option<String>,
    #[serde(default)]
    pub impact_score: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// The goal the feed and matches are curated by, if one has been synced.
    pub fn goal(&self) -> Option<&str> {
        self.current_goal.as_deref().filter(|g| !g.trim().is_empty())
    }
}

/// Another user as shown in matches and profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPublic {
    pub id: String,
    pub username: String,
    pub bio: Option<String>,
    pub current_goal: Option<String>,
    #[serde(default)]
    pub impact_score: i64,
    pub similarity_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    pub impact_score: i64,
    pub connections_count: i64,
    pub posts_count: i64,
    pub focus_sessions_count: i64,
    pub total_focus_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Partial profile edit; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncGoalRequest {
    pub goal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncGoalResponse {
    pub message: String,
    pub goal: String,
    pub vector_updated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// `h3_index` is an opaque spatial cell identifier computed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateLocationResponse {
    pub message: String,
    pub h3_index: String,
    pub latitude: f64,
    pub longitude: f64,
}
