use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::domain::{
        Article, ConstitutionalPart, DifficultyFilter, LearnTab, QuizAttempt, QuizCategory,
        UserProgress,
    },
    services::score_aggregator::percentage,
};

pub const NO_PARTS_MESSAGE: &str = "No parts match your search.";
pub const NO_ARTICLES_MESSAGE: &str = "No articles match your search.";

/// Learn page payload. An empty result carries a message instead of a blank list.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct LearnView {
    pub query: String,
    pub difficulty: DifficultyFilter,
    pub tab: LearnTab,
    pub parts: Vec<ConstitutionalPart>,
    pub articles: Vec<Article>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl LearnView {
    pub fn empty_message_for(tab: LearnTab, parts: &[ConstitutionalPart], articles: &[Article]) -> Option<String> {
        match tab {
            LearnTab::Parts if parts.is_empty() => Some(NO_PARTS_MESSAGE.to_string()),
            LearnTab::Articles if articles.is_empty() => Some(NO_ARTICLES_MESSAGE.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct CategoryCard {
    pub category: QuizCategory,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct AttemptSummary {
    pub attempt: QuizAttempt,
    pub percentage: u32,
    pub relative_date: String,
}

impl AttemptSummary {
    pub fn new(attempt: QuizAttempt, now: DateTime<Utc>) -> Self {
        AttemptSummary {
            percentage: percentage(&attempt),
            relative_date: attempt.relative_date_label(now),
            attempt,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizDashboard {
    pub categories: Vec<CategoryCard>,
    pub recent_attempts: Vec<AttemptSummary>,
    pub progress: UserProgress,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuestTokenResponse {
    pub token: String,
    pub learner_id: String,
    pub expires_in_hours: i64,
}
