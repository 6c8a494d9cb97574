use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Article, ConstitutionalPart, InteractionState},
        dto::response::LearnView,
    },
    repositories::ContentRepository,
    services::content_filter::{filter_content, ContentQuery},
};

pub struct ContentService {
    repository: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_parts(&self, query: &ContentQuery) -> AppResult<Vec<ConstitutionalPart>> {
        let parts = self.repository.list_parts().await?;
        Ok(filter_content(&parts, query).into_iter().cloned().collect())
    }

    pub async fn list_articles(&self, query: &ContentQuery) -> AppResult<Vec<Article>> {
        self.repository.list_articles(query).await
    }

    pub async fn get_part(&self, id: u32) -> AppResult<ConstitutionalPart> {
        self.repository
            .find_part(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Constitutional part {} not found", id)))
    }

    pub async fn get_article(&self, id: u32) -> AppResult<Article> {
        self.repository
            .find_article(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))
    }

    /// Everything the Learn page renders for the given browsing state.
    pub async fn learn_view(&self, state: &InteractionState) -> AppResult<LearnView> {
        let query = ContentQuery::new(state.search_query.clone(), state.difficulty);
        let parts = self.list_parts(&query).await?;
        let articles = self.list_articles(&query).await?;
        let empty_message = LearnView::empty_message_for(state.tab, &parts, &articles);

        if empty_message.is_some() {
            log::debug!(
                "learn view for '{}' ({:?}) is empty on tab {:?}",
                state.search_query,
                state.difficulty,
                state.tab
            );
        }

        Ok(LearnView {
            query: state.search_query.clone(),
            difficulty: state.difficulty,
            tab: state.tab,
            parts,
            articles,
            empty_message,
        })
    }
}
