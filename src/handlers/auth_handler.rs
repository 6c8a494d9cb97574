use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::GuestTokenResponse};

/// Issues a token for a new anonymous learner so attempts can be recorded.
#[post("/api/auth/guest")]
pub async fn create_guest_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (learner_id, token) = state.jwt_service.create_guest_token()?;
    log::info!("Issued guest token for learner {}", learner_id);

    Ok(HttpResponse::Created().json(GuestTokenResponse {
        token,
        learner_id,
        expires_in_hours: state.jwt_service.expiration_hours(),
    }))
}
