//! Data models exchanged with the Synapse API.

mod feed;
mod focus;
mod matching;
pub(crate) mod timestamp;
mod user;

pub use feed::{FeedResponse, Post, PostCreate, PostImpactResponse};
pub use focus::{FocusSession, FocusSessionStart};
pub use matching::{
    ConnectRequest, ConnectResponse, ConnectionStatus, ImpactRequest, ImpactResponse,
    MatchResult, MatchesResponse,
};
pub use user::{
    LoginRequest, ProfileUpdate, RegisterRequest, SyncGoalRequest, SyncGoalResponse, Token,
    UpdateLocationRequest, UpdateLocationResponse, UserProfile, UserPublic, UserStats,
};
