use serde::{Deserialize, Serialize};

use crate::models::domain::{Article, ConstitutionalPart, Difficulty, DifficultyFilter};

/// Anything the Learn page can search and filter by difficulty.
pub trait Searchable {
    fn difficulty(&self) -> Difficulty;
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for ConstitutionalPart {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.part.as_str(),
            self.articles.as_str(),
        ]
    }
}

impl Searchable for Article {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.summary.as_str(),
            self.simplified_summary.as_str(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentQuery {
    pub text: String,
    pub difficulty: DifficultyFilter,
}

impl ContentQuery {
    pub fn new(text: impl Into<String>, difficulty: DifficultyFilter) -> Self {
        Self {
            text: text.into(),
            difficulty,
        }
    }

    /// Lowercased, trimmed needle; `None` means no text filtering.
    fn needle(&self) -> Option<String> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if !self.difficulty.matches(item.difficulty()) {
            return false;
        }
        match self.needle() {
            None => true,
            Some(needle) => item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle)),
        }
    }
}

/// Visible subset of `items`, in catalog order. No matches is an empty vec.
pub fn filter_content<'a, T: Searchable>(items: &'a [T], query: &ContentQuery) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}
