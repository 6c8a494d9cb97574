use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use nyaya_server::{
    errors::AppResult,
    models::domain::{AttemptStatus, QuizAttempt},
    repositories::{InMemoryQuizAttemptRepository, QuizAttemptRepository},
};

/// Naive single-vector log, used to check the contract is not tied to one implementation.
struct VecQuizAttemptRepository {
    attempts: Arc<RwLock<Vec<QuizAttempt>>>,
}

impl VecQuizAttemptRepository {
    fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl QuizAttemptRepository for VecQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.attempts.write().await.push(attempt.clone());
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        Ok(self.attempts.read().await.iter().find(|a| a.id == id).cloned())
    }

    async fn list_attempts(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let mut items: Vec<QuizAttempt> = self
            .attempts
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(items)
    }
}

fn attempt(user_id: &str, score: u32, status: AttemptStatus, hours_ago: i64) -> QuizAttempt {
    QuizAttempt::new(
        user_id,
        1,
        "Fundamental Rights",
        score,
        100,
        status,
        Utc::now() - Duration::hours(hours_ago),
    )
    .unwrap()
}

async fn assert_lists_most_recent_first(repo: &dyn QuizAttemptRepository) {
    let oldest = repo
        .create(attempt("learner-a", 40, AttemptStatus::Completed, 48))
        .await
        .unwrap();
    let newest = repo
        .create(attempt("learner-a", 90, AttemptStatus::Completed, 1))
        .await
        .unwrap();
    let middle = repo
        .create(attempt("learner-a", 0, AttemptStatus::Abandoned, 24))
        .await
        .unwrap();

    let ids: Vec<String> = repo
        .list_attempts("learner-a")
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
}

async fn assert_logs_are_per_learner(repo: &dyn QuizAttemptRepository) {
    repo.create(attempt("learner-b", 70, AttemptStatus::Completed, 2))
        .await
        .unwrap();

    assert_eq!(repo.list_attempts("learner-b").await.unwrap().len(), 1);
    assert!(repo.list_attempts("nobody").await.unwrap().is_empty());
}

async fn assert_find_by_id(repo: &dyn QuizAttemptRepository) {
    let created = repo
        .create(attempt("learner-c", 55, AttemptStatus::Completed, 3))
        .await
        .unwrap();

    let found = repo.find_by_id(&created.id).await.unwrap();
    assert_eq!(found, Some(created));
    assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
}

#[actix_web::test]
async fn test_in_memory_repository_contract() {
    let repo = InMemoryQuizAttemptRepository::new();
    assert_lists_most_recent_first(&repo).await;
    assert_logs_are_per_learner(&repo).await;
    assert_find_by_id(&repo).await;
}

#[actix_web::test]
async fn test_vec_repository_contract() {
    let repo = VecQuizAttemptRepository::new();
    assert_lists_most_recent_first(&repo).await;
    assert_logs_are_per_learner(&repo).await;
    assert_find_by_id(&repo).await;
}

#[actix_web::test]
async fn test_in_memory_repository_rejects_duplicate_ids() {
    let repo = InMemoryQuizAttemptRepository::new();
    let first = repo
        .create(attempt("learner-d", 80, AttemptStatus::Completed, 1))
        .await
        .unwrap();

    assert!(repo.create(first).await.is_err());
    assert_eq!(repo.list_attempts("learner-d").await.unwrap().len(), 1);
}
