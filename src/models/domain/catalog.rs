use std::collections::HashSet;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Article, ConstitutionalPart, QuizCategory},
};

/// Immutable, ordered reference data with no mutation API.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    parts: Vec<ConstitutionalPart>,
    articles: Vec<Article>,
    categories: Vec<QuizCategory>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range metadata.
    pub fn load(
        parts: Vec<ConstitutionalPart>,
        articles: Vec<Article>,
        categories: Vec<QuizCategory>,
    ) -> AppResult<Self> {
        ensure_unique("part", parts.iter().map(|p| p.id))?;
        ensure_unique("article", articles.iter().map(|a| a.id))?;
        ensure_unique("quiz category", categories.iter().map(|c| c.id))?;

        if let Some(article) = articles.iter().find(|a| !a.has_valid_rating()) {
            return Err(AppError::ValidationError(format!(
                "Article {} has rating {} outside 0.0-{}",
                article.id,
                article.rating,
                Article::MAX_RATING
            )));
        }

        if let Some(category) = categories.iter().find(|c| !c.is_well_formed()) {
            return Err(AppError::ValidationError(format!(
                "Quiz category {} needs at least one question and an average score within 0-100",
                category.id
            )));
        }

        Ok(Self {
            parts,
            articles,
            categories,
        })
    }

    pub fn parts(&self) -> &[ConstitutionalPart] {
        &self.parts
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn categories(&self) -> &[QuizCategory] {
        &self.categories
    }
}

fn ensure_unique(kind: &str, ids: impl Iterator<Item = u32>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::ValidationError(format!(
                "Duplicate {} id {}",
                kind, id
            )));
        }
    }
    Ok(())
}
