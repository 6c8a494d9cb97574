pub mod catalog;
pub mod content;
pub mod difficulty;
pub mod interaction;
pub mod quiz_attempt;
pub mod quiz_category;
pub mod quiz_session;
pub mod route;
pub mod user_progress;
pub use catalog::Catalog;
pub use content::{Article, ConstitutionalPart, IconKey};
pub use difficulty::{Difficulty, DifficultyFilter};
pub use interaction::{InteractionEvent, InteractionState, LearnTab, QuizSessionSelector};
pub use quiz_attempt::{AttemptStatus, QuizAttempt};
pub use quiz_category::QuizCategory;
pub use quiz_session::{QuizSession, SessionState};
pub use route::Route;
pub use user_progress::UserProgress;
