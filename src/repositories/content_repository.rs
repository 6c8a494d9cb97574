use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::domain::{Article, Catalog, ConstitutionalPart},
    services::content_filter::{filter_content, ContentQuery},
};

/// Read-only source of constitutional content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_parts(&self) -> AppResult<Vec<ConstitutionalPart>>;
    async fn list_articles(&self, query: &ContentQuery) -> AppResult<Vec<Article>>;
    async fn find_part(&self, id: u32) -> AppResult<Option<ConstitutionalPart>>;
    async fn find_article(&self, id: u32) -> AppResult<Option<Article>>;
}

pub struct StaticContentRepository {
    catalog: Arc<Catalog>,
}

impl StaticContentRepository {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ContentRepository for StaticContentRepository {
    async fn list_parts(&self) -> AppResult<Vec<ConstitutionalPart>> {
        Ok(self.catalog.parts().to_vec())
    }

    async fn list_articles(&self, query: &ContentQuery) -> AppResult<Vec<Article>> {
        Ok(filter_content(self.catalog.articles(), query)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn find_part(&self, id: u32) -> AppResult<Option<ConstitutionalPart>> {
        Ok(self.catalog.parts().iter().find(|p| p.id == id).cloned())
    }

    async fn find_article(&self, id: u32) -> AppResult<Option<Article>> {
        Ok(self.catalog.articles().iter().find(|a| a.id == id).cloned())
    }
}
