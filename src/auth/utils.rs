use async_graphql::Context;

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
};

/// Claims attached to a GraphQL request by the HTTP layer, if it carried a valid token.
pub fn extract_claims_from_context(ctx: &Context<'_>) -> AppResult<Claims> {
    ctx.data::<Claims>()
        .cloned()
        .map_err(|_| AppError::Unauthorized("Authentication required".to_string()))
}
