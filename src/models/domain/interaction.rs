use async_graphql::Enum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{
    errors::AppError,
    models::domain::{difficulty::DifficultyFilter, route::Route},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Enum)]
pub enum LearnTab {
    #[default]
    Parts,
    Articles,
    Glossary,
}

impl FromStr for LearnTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "parts" => Ok(LearnTab::Parts),
            "articles" => Ok(LearnTab::Articles),
            "glossary" => Ok(LearnTab::Glossary),
            other => Err(AppError::ValidationError(format!("Unknown tab '{}'", other))),
        }
    }
}

/// Highlighted quiz category. Selecting never deselects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSessionSelector {
    selected: Option<u32>,
}

impl QuizSessionSelector {
    pub fn select_category(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn current_selection(&self) -> Option<u32> {
        self.selected
    }
}

/// Session-local browsing state. Discarded on navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InteractionState {
    pub search_query: String,
    pub difficulty: DifficultyFilter,
    pub tab: LearnTab,
    pub quiz_selection: QuizSessionSelector,
    pub menu_open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    SearchChanged(String),
    DifficultySelected(DifficultyFilter),
    TabSelected(LearnTab),
    QuizCategorySelected(u32),
    MenuToggled,
    Navigated(Route),
}

impl InteractionState {
    pub fn apply(mut self, event: InteractionEvent) -> Self {
        match event {
            InteractionEvent::SearchChanged(text) => self.search_query = text,
            InteractionEvent::DifficultySelected(filter) => self.difficulty = filter,
            InteractionEvent::TabSelected(tab) => self.tab = tab,
            InteractionEvent::QuizCategorySelected(id) => self.quiz_selection.select_category(id),
            InteractionEvent::MenuToggled => self.menu_open = !self.menu_open,
            InteractionEvent::Navigated(route) => {
                log::debug!("navigated to {}; resetting interaction state", route.path());
                return InteractionState::default();
            }
        }
        self
    }

    pub fn selected_category(&self) -> Option<u32> {
        self.quiz_selection.current_selection()
    }
}
