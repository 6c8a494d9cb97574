use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use crate::{
    errors::AppResult,
    models::domain::{
        Article, AttemptStatus, Catalog, ConstitutionalPart, Difficulty, IconKey, QuizAttempt,
        QuizCategory,
    },
};

static CATALOG: Lazy<AppResult<Catalog>> =
    Lazy::new(|| Catalog::load(builtin_parts(), builtin_articles(), builtin_categories()));

/// Process-wide reference data, loaded and validated on first access.
pub fn catalog() -> AppResult<&'static Catalog> {
    CATALOG.as_ref().map_err(Clone::clone)
}

pub fn builtin_parts() -> Vec<ConstitutionalPart> {
    vec![
        ConstitutionalPart {
            id: 1,
            part: "Part I".to_string(),
            title: "The Union and its Territory".to_string(),
            articles: "Articles 1-4".to_string(),
            description: "Defines India as a Union of States and territorial jurisdiction"
                .to_string(),
            difficulty: Difficulty::Beginner,
            read_time_minutes: 5,
            icon: IconKey::Shield,
        },
        ConstitutionalPart {
            id: 3,
            part: "Part III".to_string(),
            title: "Fundamental Rights".to_string(),
            articles: "Articles 12-35".to_string(),
            description: "Basic human rights guaranteed to all citizens of India".to_string(),
            difficulty: Difficulty::Intermediate,
            read_time_minutes: 15,
            icon: IconKey::Scale,
        },
        ConstitutionalPart {
            id: 4,
            part: "Part IV".to_string(),
            title: "Directive Principles of State Policy".to_string(),
            articles: "Articles 36-51".to_string(),
            description: "Guidelines for state governance and policy making".to_string(),
            difficulty: Difficulty::Intermediate,
            read_time_minutes: 12,
            icon: IconKey::Gavel,
        },
    ]
}

pub fn builtin_articles() -> Vec<Article> {
    vec![
        Article {
            id: 14,
            title: "Article 14 - Right to Equality".to_string(),
            summary: "The State shall not deny to any person equality before the law or equal protection of laws.".to_string(),
            simplified_summary: "Everyone is equal before the law. No discrimination allowed."
                .to_string(),
            difficulty: Difficulty::Beginner,
            read_time_minutes: 3,
            views: 12_500,
            rating: 4.8,
        },
        Article {
            id: 19,
            title: "Article 19 - Freedom of Speech and Expression".to_string(),
            summary: "Protection of certain rights regarding freedom of speech, assembly, association, etc.".to_string(),
            simplified_summary: "You have the right to express your opinions freely (with reasonable restrictions).".to_string(),
            difficulty: Difficulty::Intermediate,
            read_time_minutes: 7,
            views: 9_800,
            rating: 4.9,
        },
        Article {
            id: 21,
            title: "Article 21 - Right to Life and Personal Liberty".to_string(),
            summary: "No person shall be deprived of his life or personal liberty except according to procedure established by law.".to_string(),
            simplified_summary: "Your right to life and freedom is protected. Can only be restricted through fair legal process.".to_string(),
            difficulty: Difficulty::Beginner,
            read_time_minutes: 4,
            views: 15_200,
            rating: 4.9,
        },
    ]
}

pub fn builtin_categories() -> Vec<QuizCategory> {
    vec![
        QuizCategory {
            id: 1,
            title: "Fundamental Rights".to_string(),
            description: "Test your knowledge of Articles 12-35".to_string(),
            question_count: 15,
            difficulty: Difficulty::Beginner,
            duration_minutes: 10,
            attempts: 2_500,
            average_score: 78,
            icon: "⚖️".to_string(),
        },
        QuizCategory {
            id: 2,
            title: "Directive Principles".to_string(),
            description: "Understanding state policy guidelines".to_string(),
            question_count: 12,
            difficulty: Difficulty::Intermediate,
            duration_minutes: 8,
            attempts: 1_800,
            average_score: 65,
            icon: "📋".to_string(),
        },
        QuizCategory {
            id: 3,
            title: "Constitutional Amendments".to_string(),
            description: "Key amendments and their impact".to_string(),
            question_count: 20,
            difficulty: Difficulty::Advanced,
            duration_minutes: 15,
            attempts: 900,
            average_score: 58,
            icon: "📝".to_string(),
        },
    ]
}

pub const DEMO_LEARNER_ID: &str = "demo-learner";

/// Sample history for the demo learner. "Parliamentary System" (category 5)
/// is not in the catalog; attempts only hold a weak reference.
pub fn demo_attempts(now: DateTime<Utc>) -> AppResult<Vec<QuizAttempt>> {
    Ok(vec![
        QuizAttempt::new(
            DEMO_LEARNER_ID,
            1,
            "Fundamental Rights",
            85,
            100,
            AttemptStatus::Completed,
            now - Duration::hours(2),
        )?,
        QuizAttempt::new(
            DEMO_LEARNER_ID,
            2,
            "Directive Principles",
            92,
            100,
            AttemptStatus::Completed,
            now - Duration::days(1),
        )?,
        QuizAttempt::new(
            DEMO_LEARNER_ID,
            5,
            "Parliamentary System",
            0,
            100,
            AttemptStatus::Abandoned,
            now - Duration::days(2),
        )?,
    ])
}
