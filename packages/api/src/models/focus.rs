use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// A focus session. At most one is active per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FocusSession {
    pub id: String,
    pub goal: String,
    #[serde(with = "timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub is_active: bool,
}

impl FocusSession {
    /// Time spent in the session as of `now`, derived from the stored start time.
    ///
    /// Ended sessions stop at their end time. Clock skew that would put `now`
    /// before the start yields zero.
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        let until = self.end_time.unwrap_or(now);
        (until - self.start_time).max(Duration::zero())
    }

    /// Whole minutes elapsed: `floor((now - start_time) / 60000 ms)`.
    pub fn elapsed_minutes_at(&self, now: DateTime<Utc>) -> i64 {
        self.elapsed_at(now).num_milliseconds() / MILLIS_PER_MINUTE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FocusSessionStart {
    pub goal: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session_started_at(start: DateTime<Utc>) -> FocusSession {
        FocusSession {
            id: "f1".to_string(),
            goal: "Write the parser".to_string(),
            start_time: start,
            end_time: None,
            duration_minutes: None,
            is_active: true,
        }
    }

    #[test]
    fn test_elapsed_minutes_is_floor_of_wall_clock_difference() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let session = session_started_at(start);

        // Irregular sample points, as a drifting or throttled timer would produce.
        for millis in [0_i64, 59_999, 60_000, 61_500, 1_799_999, 3_600_000, 5_432_100] {
            let now = start + Duration::milliseconds(millis);
            assert_eq!(session.elapsed_minutes_at(now), millis / 60_000, "at {millis}ms");
        }
    }

    #[test]
    fn test_elapsed_is_clamped_and_stops_at_end() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut session = session_started_at(start);
        assert_eq!(session.elapsed_minutes_at(start - Duration::minutes(3)), 0);

        session.end_time = Some(start + Duration::minutes(25));
        session.is_active = false;
        assert_eq!(session.elapsed_minutes_at(start + Duration::hours(4)), 25);
    }

    #[test]
    fn test_deserialize_backend_session() {
        let json = r#"{
            "id": "a1b2",
            "goal": "Deep work on the radar view",
            "start_time": "2024-05-01T09:00:00.123456",
            "end_time": null,
            "duration_minutes": null,
            "is_active": true
        }"#;
        let session: FocusSession = serde_json::from_str(json).unwrap();
        assert!(session.is_active);
        assert!(session.end_time.is_none());
        assert_eq!(session.start_time.timestamp(), 1714554000);
    }
}
