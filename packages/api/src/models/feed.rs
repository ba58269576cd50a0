use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub author_username: Option<String>,
    pub content: String,
    #[serde(default)]
    pub impact_count: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Similarity to the viewer's goal, in percent. Only set on the curated feed.
    pub similarity_score: Option<f64>,
    #[serde(default)]
    pub is_impacted_by_me: bool,
}

impl Post {
    pub fn author(&self) -> &str {
        self.author_username.as_deref().unwrap_or("anonymous")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeedResponse {
    pub posts: Vec<Post>,
    pub total_count: i64,
    /// The goal the feed was ranked against, or a hint to set one.
    pub curated_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostCreate {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostImpactResponse {
    pub message: String,
    pub is_constructive: bool,
    pub impact_points: i64,
    pub post_impact_count: i64,
}
