use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        quiz_attempt::{AttemptStatus, QuizAttempt},
        quiz_category::QuizCategory,
    },
};

/// NotStarted -> InProgress -> {Completed, Abandoned}. Terminal states are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
    Abandoned,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Completed | SessionState::Abandoned)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizSession {
    pub id: String,
    pub user_id: String,
    pub category_id: u32,
    pub quiz_title: String,
    pub question_count: u32,
    pub state: SessionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_id: Option<String>,
}

impl QuizSession {
    pub fn new(user_id: &str, category: &QuizCategory) -> Self {
        QuizSession {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category_id: category.id,
            quiz_title: category.title.clone(),
            question_count: category.question_count,
            state: SessionState::NotStarted,
            started_at: None,
            finished_at: None,
            attempt_id: None,
        }
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        self.expect_state(SessionState::NotStarted, "start")?;
        self.state = SessionState::InProgress;
        self.started_at = Some(now);
        Ok(())
    }

    /// Full submission. The scale must match the category's question count.
    pub fn submit(&mut self, score: u32, max_score: u32, now: DateTime<Utc>) -> AppResult<QuizAttempt> {
        self.expect_state(SessionState::InProgress, "submit")?;
        if max_score != self.question_count {
            return Err(AppError::ValidationError(format!(
                "Max score {} does not match the {} questions of '{}'",
                max_score, self.question_count, self.quiz_title
            )));
        }

        let attempt = QuizAttempt::new(
            &self.user_id,
            self.category_id,
            &self.quiz_title,
            score,
            max_score,
            AttemptStatus::Completed,
            now,
        )?;
        self.finish(SessionState::Completed, &attempt, now);
        Ok(attempt)
    }

    /// Session ended before submission; recorded as a zero score.
    pub fn abandon(&mut self, now: DateTime<Utc>) -> AppResult<QuizAttempt> {
        self.expect_state(SessionState::InProgress, "abandon")?;

        let attempt = QuizAttempt::new(
            &self.user_id,
            self.category_id,
            &self.quiz_title,
            0,
            self.question_count,
            AttemptStatus::Abandoned,
            now,
        )?;
        self.finish(SessionState::Abandoned, &attempt, now);
        Ok(attempt)
    }

    /// In progress for at least `timeout` as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        self.state == SessionState::InProgress
            && self.started_at.is_some_and(|started| now - started >= timeout)
    }

    fn finish(&mut self, state: SessionState, attempt: &QuizAttempt, now: DateTime<Utc>) {
        self.state = state;
        self.finished_at = Some(now);
        self.attempt_id = Some(attempt.id.clone());
    }

    fn expect_state(&self, expected: SessionState, action: &str) -> AppResult<()> {
        if self.state != expected {
            return Err(AppError::InvalidTransition(format!(
                "Cannot {} session {} in state {:?}",
                action, self.id, self.state
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::difficulty::Difficulty;

    fn category() -> QuizCategory {
        QuizCategory {
            id: 2,
            title: "Directive Principles".to_string(),
            description: "Understanding state policy guidelines".to_string(),
            question_count: 12,
            difficulty: Difficulty::Intermediate,
            duration_minutes: 8,
            attempts: 1800,
            average_score: 65,
            icon: "📋".to_string(),
        }
    }

    fn started_session() -> QuizSession {
        let mut session = QuizSession::new("learner-1", &category());
        session.start(Utc::now()).unwrap();
        session
    }

    #[test]
    fn new_session_is_not_started() {
        let session = QuizSession::new("learner-1", &category());
        assert_eq!(session.state, SessionState::NotStarted);
        assert_eq!(session.question_count, 12);
        assert!(session.started_at.is_none());
    }

    #[test]
    fn submit_completes_and_produces_attempt() {
        let mut session = started_session();
        let attempt = session.submit(9, 12, Utc::now()).unwrap();

        assert_eq!(session.state, SessionState::Completed);
        assert_eq!(attempt.status, AttemptStatus::Completed);
        assert_eq!(attempt.score, 9);
        assert_eq!(attempt.category_id, 2);
        assert_eq!(session.attempt_id.as_deref(), Some(attempt.id.as_str()));
    }

    #[test]
    fn abandon_records_zero_score() {
        let mut session = started_session();
        let attempt = session.abandon(Utc::now()).unwrap();

        assert_eq!(session.state, SessionState::Abandoned);
        assert_eq!(attempt.status, AttemptStatus::Abandoned);
        assert_eq!(attempt.score, 0);
        assert_eq!(attempt.max_score, 12);
    }

    #[test]
    fn cannot_submit_before_start() {
        let mut session = QuizSession::new("learner-1", &category());
        let err = session.submit(5, 12, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
        assert_eq!(session.state, SessionState::NotStarted);
    }

    #[test]
    fn terminal_states_reject_every_transition() {
        let mut completed = started_session();
        completed.submit(12, 12, Utc::now()).unwrap();
        assert!(completed.start(Utc::now()).is_err());
        assert!(completed.submit(1, 12, Utc::now()).is_err());
        assert!(completed.abandon(Utc::now()).is_err());
        assert_eq!(completed.state, SessionState::Completed);

        let mut abandoned = started_session();
        abandoned.abandon(Utc::now()).unwrap();
        assert!(abandoned.submit(1, 12, Utc::now()).is_err());
        assert_eq!(abandoned.state, SessionState::Abandoned);
    }

    #[test]
    fn submit_rejects_mismatched_scale_and_stays_in_progress() {
        let mut session = started_session();
        let err = session.submit(85, 100, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(session.state, SessionState::InProgress);

        let err = session.submit(13, 12, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(session.state, SessionState::InProgress);
    }

    #[test]
    fn only_long_running_sessions_expire() {
        let session = started_session();
        let started = session.started_at.unwrap();
        let timeout = Duration::minutes(30);

        assert!(!session.is_expired(started + Duration::minutes(29), timeout));
        assert!(session.is_expired(started + Duration::minutes(30), timeout));

        let mut finished = started_session();
        finished.abandon(Utc::now()).unwrap();
        assert!(!finished.is_expired(Utc::now() + Duration::hours(5), timeout));

        let fresh = QuizSession::new("learner-1", &category());
        assert!(!fresh.is_expired(Utc::now() + Duration::hours(5), timeout));
    }
}
