use async_graphql::InputObject;
use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::domain::{
        DifficultyFilter, InteractionEvent, InteractionState, LearnTab,
    },
    services::content_filter::ContentQuery,
};

/// `?q=&difficulty=` as sent by the Learn page search box and filter buttons.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContentQueryParams {
    #[validate(length(max = 200))]
    pub q: Option<String>,
    pub difficulty: Option<String>,
}

impl ContentQueryParams {
    pub fn difficulty_filter(&self) -> AppResult<DifficultyFilter> {
        self.difficulty
            .as_deref()
            .map(|d| d.parse::<DifficultyFilter>())
            .transpose()
            .map(|filter| filter.unwrap_or_default())
    }

    pub fn to_query(&self) -> AppResult<ContentQuery> {
        self.validate()?;
        Ok(ContentQuery::new(
            self.q.clone().unwrap_or_default(),
            self.difficulty_filter()?,
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LearnParams {
    #[validate(length(max = 200))]
    pub q: Option<String>,
    pub difficulty: Option<String>,
    pub tab: Option<String>,
}

impl LearnParams {
    /// Replays the query string as the input events a fresh page would see.
    pub fn to_state(&self) -> AppResult<InteractionState> {
        self.validate()?;
        let difficulty = ContentQueryParams {
            q: None,
            difficulty: self.difficulty.clone(),
        }
        .difficulty_filter()?;
        let tab = match self.tab.as_deref() {
            Some(tab) => tab.parse::<LearnTab>()?,
            None => LearnTab::default(),
        };

        Ok(InteractionState::default()
            .apply(InteractionEvent::SearchChanged(
                self.q.clone().unwrap_or_default(),
            ))
            .apply(InteractionEvent::DifficultySelected(difficulty))
            .apply(InteractionEvent::TabSelected(tab)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    pub selected: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct StartQuizRequest {
    #[validate(range(min = 1))]
    pub category_id: u32,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SubmitQuizRequest {
    pub score: u32,

    #[validate(range(min = 1))]
    pub max_score: u32,
}
