use serde::{Deserialize, Serialize};

use super::UserPublic;

/// A server-computed pairing with another user nearby.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub user: UserPublic,
    pub similarity_percentage: f64,
    /// Number of H3 cells between the two users.
    pub h3_distance: i64,
    pub is_neighbor: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchesResponse {
    pub matches: Vec<MatchResult>,
    pub total_count: i64,
    /// Empty until the user has shared a location.
    pub user_h3_index: String,
}

impl MatchesResponse {
    pub fn has_location(&self) -> bool {
        !self.user_h3_index.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactRequest {
    pub to_user_id: String,
    pub feedback_content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactResponse {
    pub message: String,
    pub is_constructive: bool,
    pub impact_given: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectRequest {
    pub to_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectResponse {
    pub message: String,
    pub connection_id: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ConnectionStatus {
    pub is_connected: bool,
}
