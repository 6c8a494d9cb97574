use actix_web::{web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::{app_state::AppState, auth::bearer_token, graphql::Schema};

/// Runs a GraphQL request. A valid bearer token puts its claims in the request data;
/// an invalid one is ignored so public fields still resolve.
pub async fn graphql_handler(
    schema: web::Data<Schema>,
    state: web::Data<AppState>,
    http_req: HttpRequest,
    gql_req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = gql_req.into_inner();

    if let Some(token) = bearer_token(http_req.headers()) {
        match state.jwt_service.validate_token(token) {
            Ok(claims) => request = request.data(claims),
            Err(err) => log::debug!("ignoring graphql bearer token: {}", err),
        }
    }

    schema.execute(request).await.into()
}

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
