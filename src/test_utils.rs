#[cfg(test)]
pub mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::{
        constants::catalog::{builtin_articles, builtin_categories, builtin_parts},
        models::domain::{
            Article, AttemptStatus, Catalog, ConstitutionalPart, QuizAttempt, QuizCategory,
        },
    };

    pub fn sample_parts() -> Vec<ConstitutionalPart> {
        builtin_parts()
    }

    pub fn sample_articles() -> Vec<Article> {
        builtin_articles()
    }

    pub fn sample_categories() -> Vec<QuizCategory> {
        builtin_categories()
    }

    pub fn sample_catalog() -> Catalog {
        Catalog::load(sample_parts(), sample_articles(), sample_categories())
            .expect("built-in catalog is valid")
    }

    /// Completed attempt on category 1 for `user_id`.
    pub fn completed_attempt(user_id: &str, score: u32, max_score: u32, at: DateTime<Utc>) -> QuizAttempt {
        QuizAttempt::new(
            user_id,
            1,
            "Fundamental Rights",
            score,
            max_score,
            AttemptStatus::Completed,
            at,
        )
        .expect("valid attempt")
    }

    pub fn abandoned_attempt(user_id: &str, max_score: u32, at: DateTime<Utc>) -> QuizAttempt {
        QuizAttempt::new(
            user_id,
            2,
            "Directive Principles",
            0,
            max_score,
            AttemptStatus::Abandoned,
            at,
        )
        .expect("valid attempt")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_sample_catalog_counts() {
        let catalog = sample_catalog();
        assert_eq!(catalog.parts().len(), 3);
        assert_eq!(catalog.articles().len(), 3);
        assert_eq!(catalog.categories().len(), 3);
    }

    #[test]
    fn test_attempt_fixtures() {
        let now = chrono::Utc::now();
        assert!(completed_attempt("a", 85, 100, now).is_completed());
        assert!(!abandoned_attempt("a", 15, now).is_completed());
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::NOT_FOUND);
        assert_success_status(StatusCode::CREATED);
    }
}
