//! Route guard: one decision per navigation, from the route's kind and the
//! current [`AuthState`].
//!
//! | Kind | Auth | Decision |
//! |------|------|----------|
//! | Protected | loading | wait |
//! | Protected | no credential | redirect to login |
//! | Protected | credential | render |
//! | Public | credential and user | redirect to hub |
//! | Public | anything else | render |

use crate::session::{AuthState, AuthStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    Public,
    Protected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Render,
    RedirectToLogin,
    RedirectToHub,
}

pub fn evaluate(kind: RouteKind, auth: &AuthState) -> GuardDecision {
    match (kind, auth.status) {
        (RouteKind::Protected, AuthStatus::Loading) => GuardDecision::Wait,
        (RouteKind::Protected, AuthStatus::Unauthenticated) => GuardDecision::RedirectToLogin,
        (RouteKind::Protected, AuthStatus::Authenticated) => GuardDecision::Render,
        (RouteKind::Public, AuthStatus::Authenticated) if auth.user.is_some() => {
            GuardDecision::RedirectToHub
        }
        (RouteKind::Public, _) => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserProfile;
    use chrono::Utc;

    fn user() -> UserProfile {
        UserProfile {
            id: "user-1".into(),
            email: "ada@example.com".into(),
            username: "ada".into(),
            bio: None,
            current_goal: None,
            impact_score: 0,
            created_at: Utc::now(),
        }
    }

    fn state(status: AuthStatus, user: Option<UserProfile>) -> AuthState {
        AuthState { status, user }
    }

    #[test]
    fn test_protected_routes() {
        use GuardDecision::*;
        let kind = RouteKind::Protected;
        assert_eq!(evaluate(kind, &state(AuthStatus::Loading, None)), Wait);
        assert_eq!(evaluate(kind, &state(AuthStatus::Unauthenticated, None)), RedirectToLogin);
        // A credential is enough; the profile may still be on its way.
        assert_eq!(evaluate(kind, &state(AuthStatus::Authenticated, None)), Render);
        assert_eq!(evaluate(kind, &state(AuthStatus::Authenticated, Some(user()))), Render);
    }

    #[test]
    fn test_public_routes() {
        use GuardDecision::*;
        let kind = RouteKind::Public;
        assert_eq!(evaluate(kind, &state(AuthStatus::Loading, None)), Render);
        assert_eq!(evaluate(kind, &state(AuthStatus::Unauthenticated, None)), Render);
        assert_eq!(evaluate(kind, &state(AuthStatus::Authenticated, None)), Render);
        assert_eq!(
            evaluate(kind, &state(AuthStatus::Authenticated, Some(user()))),
            RedirectToHub
        );
    }
}
