use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    Completed,
    Abandoned,
}

/// One learner's finished or abandoned pass through a quiz category.
/// Attempts are append-only: nothing mutates one after it is recorded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub category_id: u32, // weak reference, the category may no longer exist
    pub quiz_title: String,
    pub score: u32,
    pub max_score: u32,
    pub status: AttemptStatus,
    pub submitted_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(
        user_id: &str,
        category_id: u32,
        quiz_title: &str,
        score: u32,
        max_score: u32,
        status: AttemptStatus,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        if max_score == 0 {
            return Err(AppError::ValidationError(
                "Attempt max score must be greater than zero".to_string(),
            ));
        }
        if score > max_score {
            return Err(AppError::ValidationError(format!(
                "Attempt score {} exceeds max score {}",
                score, max_score
            )));
        }

        Ok(QuizAttempt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category_id,
            quiz_title: quiz_title.to_string(),
            score,
            max_score,
            status,
            submitted_at,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.status == AttemptStatus::Completed
    }

    /// "2 hours ago" style label relative to `now`.
    pub fn relative_date_label(&self, now: DateTime<Utc>) -> String {
        relative_label(self.submitted_at, now)
    }
}

pub fn relative_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let (amount, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_attempt(score: u32, max_score: u32, status: AttemptStatus) -> AppResult<QuizAttempt> {
        QuizAttempt::new("learner-1", 1, "Fundamental Rights", score, max_score, status, Utc::now())
    }

    #[test]
    fn quiz_attempt_round_trip_serialization_preserves_scoring_fields() {
        let attempt = make_attempt(85, 100, AttemptStatus::Completed).unwrap();

        let json = serde_json::to_string(&attempt).expect("attempt should serialize");
        assert!(json.contains("\"status\":\"completed\""));

        let parsed: QuizAttempt = serde_json::from_str(&json).expect("attempt should deserialize");
        assert_eq!(parsed, attempt);
    }

    #[test]
    fn attempt_rejects_zero_max_score() {
        let err = make_attempt(0, 0, AttemptStatus::Abandoned).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn attempt_rejects_score_above_max() {
        let err = make_attempt(11, 10, AttemptStatus::Completed).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn relative_labels_pick_the_largest_unit() {
        let now = Utc::now();
        assert_eq!(relative_label(now, now), "just now");
        assert_eq!(relative_label(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_label(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(relative_label(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_label(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_label(now - Duration::days(2), now), "2 days ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = Utc::now();
        assert_eq!(relative_label(now + Duration::hours(3), now), "just now");
    }
}
