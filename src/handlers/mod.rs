pub mod auth_handler;
pub mod content_handler;
pub mod graphql_handler;
pub mod navigation_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::auth::AuthMiddleware;

pub use graphql_handler::{graphiql, graphql_handler};

/// Registers every REST and GraphQL route. Expects `AppState` and `Schema` app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(navigation_handler::health_check)
        .service(navigation_handler::get_navigation)
        .service(content_handler::list_parts)
        .service(content_handler::get_part)
        .service(content_handler::list_articles)
        .service(content_handler::get_article)
        .service(content_handler::learn_view)
        .service(quiz_handler::list_categories)
        .service(quiz_handler::get_category)
        .service(auth_handler::create_guest_session)
        .service(
            web::scope("/api/me")
                .wrap(AuthMiddleware)
                .service(quiz_handler::list_attempts)
                .service(quiz_handler::get_progress)
                .service(quiz_handler::get_dashboard)
                .service(quiz_handler::start_session)
                .service(quiz_handler::get_session)
                .service(quiz_handler::submit_session)
                .service(quiz_handler::abandon_session),
        )
        .route("/graphql", web::post().to(graphql_handler))
        .route("/graphiql", web::get().to(graphiql));
}
