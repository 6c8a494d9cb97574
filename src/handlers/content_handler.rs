use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{ContentQueryParams, LearnParams},
};

#[get("/api/parts")]
pub async fn list_parts(
    state: web::Data<AppState>,
    query: web::Query<ContentQueryParams>,
) -> Result<HttpResponse, AppError> {
    let query = query.to_query()?;
    let parts = state.content_service.list_parts(&query).await?;
    Ok(HttpResponse::Ok().json(parts))
}

#[get("/api/parts/{id}")]
pub async fn get_part(
    state: web::Data<AppState>,
    id: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let part = state.content_service.get_part(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(part))
}

#[get("/api/articles")]
pub async fn list_articles(
    state: web::Data<AppState>,
    query: web::Query<ContentQueryParams>,
) -> Result<HttpResponse, AppError> {
    let query = query.to_query()?;
    let articles = state.content_service.list_articles(&query).await?;
    Ok(HttpResponse::Ok().json(articles))
}

#[get("/api/articles/{id}")]
pub async fn get_article(
    state: web::Data<AppState>,
    id: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let article = state.content_service.get_article(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(article))
}

#[get("/api/learn")]
pub async fn learn_view(
    state: web::Data<AppState>,
    params: web::Query<LearnParams>,
) -> Result<HttpResponse, AppError> {
    let interaction = params.to_state()?;
    let view = state.content_service.learn_view(&interaction).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, test_utils::test_helpers::assert_error_status};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::in_memory(Config::test_config()).unwrap())
    }

    #[actix_web::test]
    async fn test_list_articles_with_query() {
        let app = test::init_service(
            App::new().app_data(state()).service(list_articles),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/articles?q=equality")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![14]);
    }

    #[actix_web::test]
    async fn test_list_parts_rejects_unknown_difficulty() {
        let app = test::init_service(App::new().app_data(state()).service(list_parts)).await;

        let req = test::TestRequest::get()
            .uri("/api/parts?difficulty=expert")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_missing_article_is_404() {
        let app = test::init_service(App::new().app_data(state()).service(get_article)).await;

        let req = test::TestRequest::get().uri("/api/articles/370").to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_learn_view_reports_empty_state() {
        let app = test::init_service(App::new().app_data(state()).service(learn_view)).await;

        let req = test::TestRequest::get()
            .uri("/api/learn?q=emergency&tab=articles")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["tab"], "Articles");
        assert_eq!(body["articles"].as_array().unwrap().len(), 0);
        assert_eq!(body["empty_message"], "No articles match your search.");
    }
}
