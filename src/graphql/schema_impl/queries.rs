use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    models::{
        domain::{
            route::{navigation, NavItem, Route},
            Article, ConstitutionalPart, DifficultyFilter, InteractionEvent, LearnTab,
            QuizAttempt, QuizCategory, UserProgress,
        },
        dto::{
            request::{ContentQueryParams, LearnParams},
            response::{LearnView, QuizDashboard},
        },
    },
    services::content_filter::ContentQuery,
};

/// Search text goes through the same length check as the REST query string.
fn content_query(query: Option<String>, difficulty: Option<DifficultyFilter>) -> Result<ContentQuery> {
    let base = ContentQueryParams {
        q: query,
        difficulty: None,
    }
    .to_query()
    .map_err(|e| e.extend())?;
    Ok(ContentQuery {
        difficulty: difficulty.unwrap_or_default(),
        ..base
    })
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn parts(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
        difficulty: Option<DifficultyFilter>,
    ) -> Result<Vec<ConstitutionalPart>> {
        let state = ctx.data::<AppState>()?;
        let query = content_query(query, difficulty)?;
        state
            .content_service
            .list_parts(&query)
            .await
            .map_err(|e| e.extend())
    }

    async fn part(&self, ctx: &Context<'_>, id: u32) -> Result<ConstitutionalPart> {
        let state = ctx.data::<AppState>()?;
        state
            .content_service
            .get_part(id)
            .await
            .map_err(|e| e.extend())
    }

    async fn articles(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
        difficulty: Option<DifficultyFilter>,
    ) -> Result<Vec<Article>> {
        let state = ctx.data::<AppState>()?;
        let query = content_query(query, difficulty)?;
        state
            .content_service
            .list_articles(&query)
            .await
            .map_err(|e| e.extend())
    }

    async fn article(&self, ctx: &Context<'_>, id: u32) -> Result<Article> {
        let state = ctx.data::<AppState>()?;
        state
            .content_service
            .get_article(id)
            .await
            .map_err(|e| e.extend())
    }

    async fn learn_view(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
        difficulty: Option<DifficultyFilter>,
        tab: Option<LearnTab>,
    ) -> Result<LearnView> {
        let state = ctx.data::<AppState>()?;
        let interaction = LearnParams {
            q: query,
            ..Default::default()
        }
        .to_state()
        .map_err(|e| e.extend())?
        .apply(InteractionEvent::DifficultySelected(difficulty.unwrap_or_default()))
            .apply(InteractionEvent::TabSelected(tab.unwrap_or_default()));
        state
            .content_service
            .learn_view(&interaction)
            .await
            .map_err(|e| e.extend())
    }

    async fn quiz_categories(
        &self,
        ctx: &Context<'_>,
        difficulty: Option<DifficultyFilter>,
    ) -> Result<Vec<QuizCategory>> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .list_categories(difficulty.unwrap_or_default())
            .await
            .map_err(|e| e.extend())
    }

    async fn quiz_category(&self, ctx: &Context<'_>, id: u32) -> Result<QuizCategory> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .get_category(id)
            .await
            .map_err(|e| e.extend())
    }

    async fn quiz_attempts(&self, ctx: &Context<'_>) -> Result<Vec<QuizAttempt>> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;
        state
            .quiz_attempt_service
            .list_attempts(&claims.sub)
            .await
            .map_err(|e| e.extend())
    }

    async fn progress(&self, ctx: &Context<'_>) -> Result<UserProgress> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;
        state
            .quiz_attempt_service
            .progress(&claims.sub)
            .await
            .map_err(|e| e.extend())
    }

    async fn dashboard(&self, ctx: &Context<'_>, selected: Option<u32>) -> Result<QuizDashboard> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;
        state
            .quiz_attempt_service
            .dashboard(&claims.sub, selected)
            .await
            .map_err(|e| e.extend())
    }

    /// Header entries; `path` marks the matching one active.
    async fn navigation(&self, path: Option<String>) -> Vec<NavItem> {
        navigation(path.as_deref().and_then(Route::from_path))
    }
}
