use std::{collections::HashMap, sync::Arc, time::Duration as StdDuration};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{
            DifficultyFilter, QuizAttempt, QuizSession, QuizSessionSelector, UserProgress,
        },
        dto::{
            request::SubmitQuizRequest,
            response::{AttemptSummary, CategoryCard, QuizDashboard},
        },
    },
    repositories::QuizAttemptRepository,
    services::{quiz_service::QuizService, score_aggregator::derive_progress},
};

pub const RECENT_ATTEMPTS_LIMIT: usize = 5;

enum Outcome {
    Submit { score: u32, max_score: u32 },
    Abandon,
}

type SessionSlot = Arc<Mutex<QuizSession>>;

/// Drives quiz sessions through their lifecycle and owns the attempt log.
///
/// Only unfinished sessions are kept; once an attempt is recorded the session
/// is dropped from the table.
pub struct QuizAttemptService {
    quiz_service: Arc<QuizService>,
    attempts: Arc<dyn QuizAttemptRepository>,
    sessions: RwLock<HashMap<String, SessionSlot>>,
    session_timeout: Duration,
}

impl QuizAttemptService {
    pub fn new(
        quiz_service: Arc<QuizService>,
        attempts: Arc<dyn QuizAttemptRepository>,
        session_timeout: Duration,
    ) -> Self {
        Self {
            quiz_service,
            attempts,
            sessions: RwLock::new(HashMap::new()),
            session_timeout,
        }
    }

    pub async fn start_session(&self, user_id: &str, category_id: u32) -> AppResult<QuizSession> {
        let category = self.quiz_service.get_category(category_id).await?;

        let mut session = QuizSession::new(user_id, &category);
        session.start(Utc::now())?;

        log::info!(
            "learner {} started session {} for '{}'",
            user_id,
            session.id,
            session.quiz_title
        );

        self.sessions
            .write()
            .await
            .insert(session.id.clone(), Arc::new(Mutex::new(session.clone())));
        Ok(session)
    }

    pub async fn get_session(&self, user_id: &str, session_id: &str) -> AppResult<QuizSession> {
        let slot = self.slot(session_id).await?;
        let session = slot.lock().await;
        if session.user_id != user_id {
            return Err(session_not_found(session_id));
        }
        Ok(session.clone())
    }

    pub async fn submit(
        &self,
        user_id: &str,
        session_id: &str,
        request: &SubmitQuizRequest,
    ) -> AppResult<QuizAttempt> {
        self.finish(
            user_id,
            session_id,
            Outcome::Submit {
                score: request.score,
                max_score: request.max_score,
            },
        )
        .await
    }

    pub async fn abandon(&self, user_id: &str, session_id: &str) -> AppResult<QuizAttempt> {
        self.finish(user_id, session_id, Outcome::Abandon).await
    }

    /// Number of sessions still awaiting an outcome.
    pub async fn open_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Abandons every session that has been in progress for longer than the
    /// configured timeout. Returns the attempts recorded for them.
    pub async fn expire_sessions(&self, now: DateTime<Utc>) -> AppResult<Vec<QuizAttempt>> {
        let slots: Vec<(String, SessionSlot)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, slot)| (id.clone(), Arc::clone(slot)))
            .collect();

        let mut expired = Vec::new();
        for (session_id, slot) in slots {
            let mut session = slot.lock().await;
            if !session.is_expired(now, self.session_timeout) {
                continue;
            }
            let attempt = self
                .record_outcome(&session_id, &mut session, Outcome::Abandon, now)
                .await?;
            log::info!(
                "session {} of learner {} timed out and was abandoned",
                session_id,
                session.user_id
            );
            expired.push(attempt);
        }
        Ok(expired)
    }

    /// Runs [`expire_sessions`](Self::expire_sessions) on a fixed period for the life of the server.
    pub fn spawn_expiry_sweep(self: Arc<Self>, period: StdDuration) {
        actix_web::rt::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                match self.expire_sessions(Utc::now()).await {
                    Ok(expired) if !expired.is_empty() => {
                        log::info!("expired {} stale quiz sessions", expired.len())
                    }
                    Ok(_) => {}
                    Err(err) => log::warn!("quiz session sweep failed: {}", err),
                }
            }
        });
    }

    async fn slot(&self, session_id: &str) -> AppResult<SessionSlot> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| session_not_found(session_id))
    }

    async fn finish(&self, user_id: &str, session_id: &str, outcome: Outcome) -> AppResult<QuizAttempt> {
        let slot = self.slot(session_id).await?;
        let mut session = slot.lock().await;
        if session.user_id != user_id {
            return Err(session_not_found(session_id));
        }

        let attempt = self
            .record_outcome(session_id, &mut session, outcome, Utc::now())
            .await?;

        log::info!(
            "session {} finished as {:?} with {}/{}",
            session_id,
            session.state,
            attempt.score,
            attempt.max_score
        );
        Ok(attempt)
    }

    /// Persists the outcome, then commits the terminal state and retires the
    /// session. On a failed write the session stays in progress.
    async fn record_outcome(
        &self,
        session_id: &str,
        session: &mut QuizSession,
        outcome: Outcome,
        now: DateTime<Utc>,
    ) -> AppResult<QuizAttempt> {
        let mut next = session.clone();
        let attempt = match outcome {
            Outcome::Submit { score, max_score } => next.submit(score, max_score, now)?,
            Outcome::Abandon => next.abandon(now)?,
        };

        let attempt = self.attempts.create(attempt).await?;
        *session = next;

        self.sessions.write().await.remove(session_id);
        Ok(attempt)
    }

    pub async fn record(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.attempts.create(attempt).await
    }

    /// Most recent first.
    pub async fn list_attempts(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        self.attempts.list_attempts(user_id).await
    }

    pub async fn progress(&self, user_id: &str) -> AppResult<UserProgress> {
        let attempts = self.attempts.list_attempts(user_id).await?;
        Ok(derive_progress(&attempts, Utc::now().date_naive()))
    }

    pub async fn dashboard(&self, user_id: &str, selected: Option<u32>) -> AppResult<QuizDashboard> {
        let mut selector = QuizSessionSelector::default();
        if let Some(id) = selected {
            self.quiz_service.select_category(&mut selector, id).await?;
        }

        let categories = self
            .quiz_service
            .list_categories(DifficultyFilter::All)
            .await?
            .into_iter()
            .map(|category| CategoryCard {
                selected: selector.current_selection() == Some(category.id),
                category,
            })
            .collect();

        let attempts = self.attempts.list_attempts(user_id).await?;
        let now = Utc::now();
        let progress = derive_progress(&attempts, now.date_naive());
        let recent_attempts = attempts
            .into_iter()
            .take(RECENT_ATTEMPTS_LIMIT)
            .map(|attempt| AttemptSummary::new(attempt, now))
            .collect();

        Ok(QuizDashboard {
            categories,
            recent_attempts,
            progress,
        })
    }
}

fn session_not_found(session_id: &str) -> AppError {
    AppError::NotFound(format!("Quiz session '{}' not found", session_id))
}
