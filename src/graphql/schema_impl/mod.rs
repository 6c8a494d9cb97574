pub mod mutations;
pub mod queries;

use async_graphql::{EmptySubscription, Schema as GraphQLSchema};

use crate::app_state::AppState;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_state)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::Claims, config::Config};
    use async_graphql::Request;

    fn schema() -> Schema {
        create_schema(AppState::in_memory(Config::test_config()).unwrap())
    }

    #[actix_web::test]
    async fn test_articles_query_filters_by_text() {
        let response = schema()
            .execute(r#"{ articles(query: "equality") { id title } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        let articles = data["articles"].as_array().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0]["id"], 14);
    }

    #[actix_web::test]
    async fn test_parts_expose_read_time_label() {
        let response = schema().execute("{ parts { id readTime readTimeMinutes } }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        assert_eq!(data["parts"][0]["readTime"], "5 min");
        assert_eq!(data["parts"][0]["readTimeMinutes"], 5);
    }

    #[actix_web::test]
    async fn test_oversized_search_is_rejected_everywhere() {
        let schema = schema();
        let long = "x".repeat(201);
        for document in [
            format!(r#"{{ parts(query: "{}") {{ id }} }}"#, long),
            format!(r#"{{ articles(query: "{}") {{ id }} }}"#, long),
            format!(r#"{{ learnView(query: "{}") {{ query }} }}"#, long),
        ] {
            let response = schema.execute(document.as_str()).await;
            assert_eq!(response.errors.len(), 1, "{}", document);
            assert_eq!(
                response.errors[0].extensions.as_ref().and_then(|e| e.get("code")),
                Some(&async_graphql::Value::from("VALIDATION_ERROR"))
            );
        }

        let response = schema
            .execute(format!(r#"{{ parts(query: "{}") {{ id }} }}"#, "x".repeat(200)).as_str())
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }

    #[actix_web::test]
    async fn test_quiz_categories_by_difficulty() {
        let response = schema()
            .execute("{ quizCategories(difficulty: BEGINNER) { id title duration } }")
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        assert_eq!(data["quizCategories"][0]["title"], "Fundamental Rights");
        assert_eq!(data["quizCategories"][0]["duration"], "10 min");
    }

    #[actix_web::test]
    async fn test_progress_requires_token() {
        let response = schema().execute("{ progress { rank } }").await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].extensions.as_ref().and_then(|e| e.get("code")),
            Some(&async_graphql::Value::from("UNAUTHORIZED"))
        );
    }

    #[actix_web::test]
    async fn test_quiz_lifecycle_through_mutations() {
        let schema = schema();
        let claims = Claims::new("learner-gql", true, 1);

        let started = schema
            .execute(
                Request::new("mutation { startQuiz(input: { categoryId: 2 }) { id state } }")
                    .data(claims.clone()),
            )
            .await;
        assert!(started.errors.is_empty(), "{:?}", started.errors);
        let started = started.data.into_json().unwrap();
        assert_eq!(started["startQuiz"]["state"], "IN_PROGRESS");
        let session_id = started["startQuiz"]["id"].as_str().unwrap().to_string();

        let submit = format!(
            r#"mutation {{ submitQuiz(sessionId: "{}", input: {{ score: 9, maxScore: 12 }}) {{ score status }} }}"#,
            session_id
        );
        let submitted = schema.execute(Request::new(submit).data(claims.clone())).await;
        assert!(submitted.errors.is_empty(), "{:?}", submitted.errors);

        let progress = schema
            .execute(Request::new("{ progress { quizzesCompleted averageScore } }").data(claims))
            .await;
        let progress = progress.data.into_json().unwrap();
        assert_eq!(progress["progress"]["quizzesCompleted"], 1);
        assert_eq!(progress["progress"]["averageScore"], 75);
    }
}
