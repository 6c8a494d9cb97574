use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Learner summary. Always derived from the attempt log, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct UserProgress {
    pub quizzes_completed: u32,
    pub average_score: u32,
    pub current_streak: u32,
    pub total_points: u64,
    pub rank: String,
}

const RANKS: [(u64, &str); 3] = [
    (100, "Constitutional Novice"),
    (500, "Rights Explorer"),
    (1000, "Civic Advocate"),
];

pub fn rank_for_points(points: u64) -> &'static str {
    RANKS
        .iter()
        .find(|(ceiling, _)| points < *ceiling)
        .map(|(_, label)| *label)
        .unwrap_or("Constitutional Scholar")
}
