//! Cache keys for every read the client performs.
//!
//! [`resource`] names are what mutations invalidate; the functions below build the
//! full keys, parameters included.

use query::QueryKey;

pub mod resource {
    pub const ME: &str = "me";
    pub const STATS: &str = "stats";
    pub const FOCUS_CURRENT: &str = "focus.current";
    pub const MATCHES: &str = "matches";
    pub const CONNECTION_STATUS: &str = "connection-status";
    pub const FEED: &str = "feed";
    pub const FEED_RECENT: &str = "feed.recent";
    pub const USER: &str = "user";
}

pub fn me() -> QueryKey {
    QueryKey::new(resource::ME)
}

pub fn stats() -> QueryKey {
    QueryKey::new(resource::STATS)
}

pub fn focus_current() -> QueryKey {
    QueryKey::new(resource::FOCUS_CURRENT)
}

pub fn matches(rings: u8, limit: u32) -> QueryKey {
    QueryKey::new(resource::MATCHES)
        .with("rings", rings)
        .with("limit", limit)
}

pub fn connection_status(user_id: &str) -> QueryKey {
    QueryKey::new(resource::CONNECTION_STATUS).with("user", user_id)
}

pub fn feed(limit: u32) -> QueryKey {
    QueryKey::new(resource::FEED).with("limit", limit)
}

pub fn feed_recent(limit: u32) -> QueryKey {
    QueryKey::new(resource::FEED_RECENT).with("limit", limit)
}

pub fn user(user_id: &str) -> QueryKey {
    QueryKey::new(resource::USER).with("id", user_id)
}
