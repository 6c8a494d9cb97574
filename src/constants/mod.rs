pub mod catalog;

pub use catalog::{catalog, DEMO_LEARNER_ID};
