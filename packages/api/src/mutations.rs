//! Every write the client can perform, and the cached reads it makes stale.
//!
//! | Mutation | Invalidates |
//! |----------|-------------|
//! | [`SYNC_GOAL`] | me, matches, feed |
//! | [`UPDATE_PROFILE`] | me |
//! | [`UPDATE_LOCATION`] | matches |
//! | [`START_FOCUS`], [`END_FOCUS`] | focus.current, stats |
//! | [`GIVE_IMPACT`] | matches, stats |
//! | [`CONNECT`] | connection-status, stats |
//! | [`CREATE_POST`], [`IMPACT_POST`] | feed, feed.recent, stats |

use query::MutationSpec;

use crate::keys::resource::*;

pub const SYNC_GOAL: MutationSpec = MutationSpec::new("sync-goal", &[ME, MATCHES, FEED]);

pub const UPDATE_PROFILE: MutationSpec = MutationSpec::new("update-profile", &[ME]);

pub const UPDATE_LOCATION: MutationSpec = MutationSpec::new("update-location", &[MATCHES]);

pub const START_FOCUS: MutationSpec = MutationSpec::new("focus-start", &[FOCUS_CURRENT, STATS]);

pub const END_FOCUS: MutationSpec = MutationSpec::new("focus-end", &[FOCUS_CURRENT, STATS]);

pub const GIVE_IMPACT: MutationSpec = MutationSpec::new("impact", &[MATCHES, STATS]);

pub const CONNECT: MutationSpec = MutationSpec::new("connect", &[CONNECTION_STATUS, STATS]);

pub const CREATE_POST: MutationSpec =
    MutationSpec::new("create-post", &[FEED, FEED_RECENT, STATS]);

pub const IMPACT_POST: MutationSpec =
    MutationSpec::new("impact-post", &[FEED, FEED_RECENT, STATS]);

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::auth::tests::jwt;
    use crate::{keys, ApiClient, ApiError, AuthContext, Credential};
    use chrono::{Duration, Utc};
    use query::{QueryCache, QueryStatus};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ApiClient {
        let token = jwt("user-1", Utc::now() + Duration::hours(1));
        let auth = AuthContext::with_credential(Credential::parse(token).unwrap());
        ApiClient::new(format!("{}/api/v1", server.uri()), auth)
    }

    fn fetch<T, Fut>(
        client: &ApiClient,
        call: impl FnOnce(ApiClient) -> Fut,
    ) -> impl FnOnce() -> Fut
    where
        Fut: std::future::Future<Output = Result<T, ApiError>>,
    {
        let client = client.clone();
        move || call(client)
    }

    fn profile(goal: &str) -> serde_json::Value {
        json!({
            "id": "user-1",
            "email": "ada@example.com",
            "username": "ada",
            "bio": null,
            "current_goal": goal,
            "impact_score": 0,
            "created_at": "2024-05-01T09:00:00Z"
        })
    }

    fn matches(total: i64) -> serde_json::Value {
        json!({ "matches": [], "total_count": total, "user_h3_index": "" })
    }

    fn feed() -> serde_json::Value {
        json!({ "posts": [], "total_count": 0, "curated_by": "Learn Rust" })
    }

    #[test]
    fn test_specs_name_known_resources() {
        for spec in [
            SYNC_GOAL,
            UPDATE_PROFILE,
            UPDATE_LOCATION,
            START_FOCUS,
            END_FOCUS,
            GIVE_IMPACT,
            CONNECT,
            CREATE_POST,
            IMPACT_POST,
        ] {
            assert!(!spec.invalidates.is_empty(), "{} invalidates nothing", spec.name);
        }
        assert!(SYNC_GOAL.affects(&keys::matches(2, 20)));
        assert!(!SYNC_GOAL.affects(&keys::stats()));
        assert!(CONNECT.affects(&keys::connection_status("user-2")));
    }

    #[tokio::test]
    async fn test_goal_sync_makes_profile_and_matches_stale() {
        let server = MockServer::start().await;
        let client = client(&server);
        let cache = QueryCache::new();

        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile("Learn Rust")))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/matching/matches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(matches(0)))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "impact_score": 0,
                "connections_count": 0,
                "posts_count": 0,
                "focus_sessions_count": 0,
                "total_focus_minutes": 0
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/users/sync-goal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Goal synced",
                "goal": "Ship Synapse",
                "vector_updated": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        cache.query(keys::me(), fetch(&client, |c| async move { c.me().await })).await.unwrap();
        cache
            .query(keys::matches(2, 20), fetch(&client, |c| async move { c.matches(2, 20).await }))
            .await
            .unwrap();
        cache
            .query(keys::stats(), fetch(&client, |c| async move { c.stats().await }))
            .await
            .unwrap();

        cache
            .mutate(&SYNC_GOAL, client.sync_goal("Ship Synapse"))
            .await
            .unwrap();

        assert_eq!(cache.status(&keys::me()), QueryStatus::Stale);
        assert_eq!(cache.status(&keys::matches(2, 20)), QueryStatus::Stale);
        assert_eq!(cache.status(&keys::stats()), QueryStatus::Fresh);

        // The first responses are spent, so the refetch sees the new goal.
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile("Ship Synapse")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/matching/matches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(matches(3)))
            .mount(&server)
            .await;

        let me = cache
            .query(keys::me(), fetch(&client, |c| async move { c.me().await }))
            .await
            .unwrap();
        assert_eq!(me.goal(), Some("Ship Synapse"));
        let found = cache
            .query(keys::matches(2, 20), fetch(&client, |c| async move { c.matches(2, 20).await }))
            .await
            .unwrap();
        assert_eq!(found.total_count, 3);

        // Untouched by the write: served from cache, no second request.
        cache
            .query(keys::stats(), fetch(&client, |c| async move { c.stats().await }))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_post_impact_invalidates_feed_and_stats() {
        let server = MockServer::start().await;
        let client = client(&server);
        let cache = QueryCache::new();

        Mock::given(method("GET"))
            .and(path("/api/v1/feed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(feed()))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/feed/posts/post-1/impact"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Impact applied",
                "is_constructive": true,
                "impact_points": 1,
                "post_impact_count": 1
            })))
            .mount(&server)
            .await;

        cache
            .query(keys::feed(10), fetch(&client, |c| async move { c.feed(10).await }))
            .await
            .unwrap();
        assert_eq!(cache.status(&keys::feed(10)), QueryStatus::Fresh);

        cache
            .mutate(&IMPACT_POST, client.impact_post("post-1", "0123456789"))
            .await
            .unwrap();
        assert_eq!(cache.status(&keys::feed(10)), QueryStatus::Stale);
    }

    #[tokio::test]
    async fn test_rejected_feedback_leaves_cache_fresh() {
        let server = MockServer::start().await;
        let client = client(&server);
        let cache = QueryCache::new();

        Mock::given(method("GET"))
            .and(path("/api/v1/matching/matches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(matches(1)))
            .mount(&server)
            .await;

        cache
            .query(keys::matches(2, 20), fetch(&client, |c| async move { c.matches(2, 20).await }))
            .await
            .unwrap();
        let err = cache
            .mutate(&GIVE_IMPACT, client.give_impact("user-2", "short"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(cache.status(&keys::matches(2, 20)), QueryStatus::Fresh);
    }
}
