use std::time::Duration;

use async_graphql::{ComplexObject, Enum, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::models::domain::difficulty::Difficulty;

/// Symbolic icon reference. Rendering is the front-end's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
pub enum IconKey {
    Shield,
    Scale,
    Gavel,
    BookOpen,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject)]
#[graphql(complex)]
pub struct ConstitutionalPart {
    pub id: u32,
    pub part: String,     // "Part III"
    pub title: String,
    pub articles: String, // "Articles 12-35"
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(rename = "read_time", with = "minutes_as_label")]
    pub read_time_minutes: u32,
    pub icon: IconKey,
}

impl ConstitutionalPart {
    pub fn read_time(&self) -> Duration {
        from_minutes(self.read_time_minutes)
    }

    pub fn read_time_label(&self) -> String {
        minutes_label(self.read_time())
    }
}

#[ComplexObject]
impl ConstitutionalPart {
    /// Display label, e.g. "15 min".
    #[graphql(name = "readTime")]
    async fn read_time_text(&self) -> String {
        self.read_time_label()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject)]
#[graphql(complex)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub simplified_summary: String,
    pub difficulty: Difficulty,
    #[serde(rename = "read_time", with = "minutes_as_label")]
    pub read_time_minutes: u32,
    pub views: u64,
    pub rating: f32,
}

impl Article {
    pub const MAX_RATING: f32 = 5.0;

    pub fn read_time(&self) -> Duration {
        from_minutes(self.read_time_minutes)
    }

    pub fn read_time_label(&self) -> String {
        minutes_label(self.read_time())
    }

    pub fn has_valid_rating(&self) -> bool {
        (0.0..=Self::MAX_RATING).contains(&self.rating)
    }
}

#[ComplexObject]
impl Article {
    #[graphql(name = "readTime")]
    async fn read_time_text(&self) -> String {
        self.read_time_label()
    }
}

pub fn from_minutes(minutes: u32) -> Duration {
    Duration::from_secs(u64::from(minutes) * 60)
}

/// Whole minutes, rounded down.
pub fn minutes_label(duration: Duration) -> String {
    format!("{} min", duration.as_secs() / 60)
}

/// Whole minutes on the wire as `"N min"`.
pub(crate) mod minutes_as_label {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{from_minutes, minutes_label};

    pub fn serialize<S>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&minutes_label(from_minutes(*minutes)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label
            .strip_suffix(" min")
            .and_then(|n| n.trim().parse().ok())
            .ok_or_else(|| de::Error::custom(format!("expected \"<minutes> min\", got \"{}\"", label)))
    }
}
