use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::{
    app_state::AppState,
    models::domain::route::{navigation, Route},
};

#[derive(Debug, Deserialize)]
pub struct NavigationParams {
    pub path: Option<String>,
}

/// Header navigation, with the entry for `?path=` marked active.
#[get("/api/navigation")]
pub async fn get_navigation(params: web::Query<NavigationParams>) -> HttpResponse {
    let current = params.path.as_deref().and_then(Route::from_path);
    HttpResponse::Ok().json(navigation(current))
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = match &state.db {
        None => "memory",
        Some(db) => match db.health_check().await {
            Ok(()) => "ok",
            Err(err) => {
                log::warn!("attempt store health check failed: {}", err);
                return HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "status": "not_ready",
                    "version": env!("CARGO_PKG_VERSION"),
                    "dependencies": { "mongodb": "error" }
                }));
            }
        },
    };

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": { "attempt_store": store }
    }))
}
