use std::time::Duration;

use async_graphql::{ComplexObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::models::domain::{
    content::{from_minutes, minutes_as_label, minutes_label},
    difficulty::Difficulty,
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[graphql(complex)]
pub struct QuizCategory {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub question_count: u32,   // > 0
    pub difficulty: Difficulty,
    #[serde(rename = "duration", with = "minutes_as_label")]
    pub duration_minutes: u32,
    pub attempts: u64,         // historical, across all learners
    pub average_score: u8,     // historical, 0..=100
    pub icon: String,
}

impl QuizCategory {
    pub fn duration(&self) -> Duration {
        from_minutes(self.duration_minutes)
    }

    pub fn duration_label(&self) -> String {
        minutes_label(self.duration())
    }

    pub fn is_well_formed(&self) -> bool {
        self.question_count > 0 && self.average_score <= 100
    }
}

#[ComplexObject]
impl QuizCategory {
    #[graphql(name = "duration")]
    async fn duration_text(&self) -> String {
        self.duration_label()
    }
}
