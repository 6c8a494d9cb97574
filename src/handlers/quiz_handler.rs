use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{
        ContentQueryParams, DashboardParams, StartQuizRequest, SubmitQuizRequest,
    },
};

#[get("/api/quiz/categories")]
pub async fn list_categories(
    state: web::Data<AppState>,
    query: web::Query<ContentQueryParams>,
) -> Result<HttpResponse, AppError> {
    let categories = state
        .quiz_service
        .list_categories(query.difficulty_filter()?)
        .await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/api/quiz/categories/{id}")]
pub async fn get_category(
    state: web::Data<AppState>,
    id: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let category = state.quiz_service.get_category(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}

#[get("/attempts")]
pub async fn list_attempts(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let attempts = state
        .quiz_attempt_service
        .list_attempts(auth.learner_id())
        .await?;
    Ok(HttpResponse::Ok().json(attempts))
}

#[get("/progress")]
pub async fn get_progress(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let progress = state.quiz_attempt_service.progress(auth.learner_id()).await?;
    Ok(HttpResponse::Ok().json(progress))
}

#[get("/dashboard")]
pub async fn get_dashboard(
    state: web::Data<AppState>,
    params: web::Query<DashboardParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let dashboard = state
        .quiz_attempt_service
        .dashboard(auth.learner_id(), params.selected)
        .await?;
    Ok(HttpResponse::Ok().json(dashboard))
}

#[post("/sessions")]
pub async fn start_session(
    state: web::Data<AppState>,
    request: web::Json<StartQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let session = state
        .quiz_attempt_service
        .start_session(auth.learner_id(), request.category_id)
        .await?;
    Ok(HttpResponse::Created().json(session))
}

#[get("/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let session = state
        .quiz_attempt_service
        .get_session(auth.learner_id(), &id)
        .await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/sessions/{id}/submit")]
pub async fn submit_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let attempt = state
        .quiz_attempt_service
        .submit(auth.learner_id(), &id, &request)
        .await?;
    Ok(HttpResponse::Created().json(attempt))
}

#[post("/sessions/{id}/abandon")]
pub async fn abandon_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let attempt = state
        .quiz_attempt_service
        .abandon(auth.learner_id(), &id)
        .await?;
    Ok(HttpResponse::Created().json(attempt))
}
