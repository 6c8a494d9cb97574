use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{DifficultyFilter, QuizCategory, QuizSessionSelector},
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_categories(&self, difficulty: DifficultyFilter) -> AppResult<Vec<QuizCategory>> {
        let categories = self.repository.list_categories().await?;
        Ok(categories
            .into_iter()
            .filter(|c| difficulty.matches(c.difficulty))
            .collect())
    }

    pub async fn get_category(&self, id: u32) -> AppResult<QuizCategory> {
        self.repository
            .find_category(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz category {} not found", id)))
    }

    /// Selects `id` only if it names a real category; the selection is untouched otherwise.
    pub async fn select_category(&self, selector: &mut QuizSessionSelector, id: u32) -> AppResult<()> {
        self.get_category(id).await?;
        selector.select_category(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::quiz_repository::MockQuizRepository,
        test_utils::fixtures::sample_categories,
    };

    fn service() -> QuizService {
        let mut repo = MockQuizRepository::new();
        repo.expect_list_categories()
            .returning(|| Ok(sample_categories()));
        repo.expect_find_category()
            .returning(|id| Ok(sample_categories().into_iter().find(|c| c.id == id)));
        QuizService::new(Arc::new(repo))
    }

    #[actix_web::test]
    async fn list_categories_filters_by_difficulty() {
        let advanced = service()
            .list_categories(DifficultyFilter::Advanced)
            .await
            .unwrap();
        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].title, "Constitutional Amendments");

        let all = service().list_categories(DifficultyFilter::All).await.unwrap();
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[actix_web::test]
    async fn unknown_category_is_not_found() {
        let err = service().get_category(9).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn selecting_twice_is_idempotent() {
        let service = service();
        let mut selector = QuizSessionSelector::default();

        service.select_category(&mut selector, 2).await.unwrap();
        service.select_category(&mut selector, 2).await.unwrap();
        assert_eq!(selector.current_selection(), Some(2));
    }

    #[actix_web::test]
    async fn selecting_unknown_category_keeps_previous_selection() {
        let service = service();
        let mut selector = QuizSessionSelector::default();
        service.select_category(&mut selector, 1).await.unwrap();

        let err = service.select_category(&mut selector, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(selector.current_selection(), Some(1));
    }
}
