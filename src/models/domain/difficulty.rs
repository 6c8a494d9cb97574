use std::{fmt, str::FromStr};

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Ordinal classification attached to content and quizzes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Enum)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(AppError::ValidationError(format!(
                "Unknown difficulty '{}'",
                other
            ))),
        }
    }
}

/// Difficulty filter as offered by the Learn and Quiz pages; `All` disables it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize, Enum,
)]
pub enum DifficultyFilter {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyFilter {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Beginner => difficulty == Difficulty::Beginner,
            DifficultyFilter::Intermediate => difficulty == Difficulty::Intermediate,
            DifficultyFilter::Advanced => difficulty == Difficulty::Advanced,
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Beginner => DifficultyFilter::Beginner,
            Difficulty::Intermediate => DifficultyFilter::Intermediate,
            Difficulty::Advanced => DifficultyFilter::Advanced,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(DifficultyFilter::All);
        }
        trimmed.parse::<Difficulty>().map(DifficultyFilter::from)
    }
}
