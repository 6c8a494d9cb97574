use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::domain::{Catalog, QuizCategory},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn list_categories(&self) -> AppResult<Vec<QuizCategory>>;
    async fn find_category(&self, id: u32) -> AppResult<Option<QuizCategory>>;
}

pub struct StaticQuizRepository {
    catalog: Arc<Catalog>,
}

impl StaticQuizRepository {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl QuizRepository for StaticQuizRepository {
    async fn list_categories(&self) -> AppResult<Vec<QuizCategory>> {
        Ok(self.catalog.categories().to_vec())
    }

    async fn find_category(&self, id: u32) -> AppResult<Option<QuizCategory>> {
        Ok(self.catalog.categories().iter().find(|c| c.id == id).cloned())
    }
}
