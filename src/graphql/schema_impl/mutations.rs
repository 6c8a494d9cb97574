use async_graphql::{Context, ErrorExtensions, Object, Result};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    errors::AppError,
    models::{
        domain::{QuizAttempt, QuizSession},
        dto::request::{StartQuizRequest, SubmitQuizRequest},
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn start_quiz(&self, ctx: &Context<'_>, input: StartQuizRequest) -> Result<QuizSession> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;

        input.validate().map_err(|e| AppError::from(e).extend())?;

        state
            .quiz_attempt_service
            .start_session(&claims.sub, input.category_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn submit_quiz(
        &self,
        ctx: &Context<'_>,
        session_id: String,
        input: SubmitQuizRequest,
    ) -> Result<QuizAttempt> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;

        input.validate().map_err(|e| AppError::from(e).extend())?;

        state
            .quiz_attempt_service
            .submit(&claims.sub, &session_id, &input)
            .await
            .map_err(|e| e.extend())
    }

    async fn abandon_quiz(&self, ctx: &Context<'_>, session_id: String) -> Result<QuizAttempt> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).map_err(|e| e.extend())?;

        state
            .quiz_attempt_service
            .abandon(&claims.sub, &session_id)
            .await
            .map_err(|e| e.extend())
    }
}
