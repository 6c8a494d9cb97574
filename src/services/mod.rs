pub mod content_filter;
pub mod content_service;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod score_aggregator;
