use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token claims for a learner. Guests get a random UUID as subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // learner id
    pub guest: bool,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn new(learner_id: &str, guest: bool, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: learner_id.to_string(),
            guest,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
