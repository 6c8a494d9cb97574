use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::{
    auth::JwtService,
    config::{AttemptStore, Config},
    constants::catalog::{catalog, demo_attempts},
    db::Database,
    errors::AppResult,
    models::domain::Catalog,
    repositories::{
        InMemoryQuizAttemptRepository, MongoQuizAttemptRepository, QuizAttemptRepository,
        StaticContentRepository, StaticQuizRepository,
    },
    services::{
        content_service::ContentService, quiz_attempt_service::QuizAttemptService,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub quiz_service: Arc<QuizService>,
    pub quiz_attempt_service: Arc<QuizAttemptService>,
    pub jwt_service: Arc<JwtService>,
    pub db: Option<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let catalog = Arc::new(catalog()?.clone());
        log::info!(
            "Loaded catalog: {} parts, {} articles, {} quiz categories",
            catalog.parts().len(),
            catalog.articles().len(),
            catalog.categories().len()
        );

        let (attempts, db): (Arc<dyn QuizAttemptRepository>, Option<Database>) =
            match config.attempt_store {
                AttemptStore::Memory => {
                    let repository: Arc<dyn QuizAttemptRepository> =
                        Arc::new(InMemoryQuizAttemptRepository::new());
                    (repository, None)
                }
                AttemptStore::Mongo => {
                    let db = Database::connect(&config).await?;
                    let repository =
                        MongoQuizAttemptRepository::new(&db, &config.attempts_collection);
                    repository.ensure_indexes().await?;
                    let repository: Arc<dyn QuizAttemptRepository> = Arc::new(repository);
                    (repository, Some(db))
                }
            };

        let state = Self::with_repositories(config, catalog, attempts, db);

        if state.config.seed_demo_data {
            if state.config.attempt_store == AttemptStore::Memory {
                for attempt in demo_attempts(Utc::now())? {
                    state.quiz_attempt_service.record(attempt).await?;
                }
                log::info!("Seeded demo attempt history");
            } else {
                log::warn!("SEED_DEMO_DATA is ignored for persistent attempt stores");
            }
        }

        Ok(state)
    }

    /// Wires services over the given catalog and attempt log.
    pub fn with_repositories(
        config: Config,
        catalog: Arc<Catalog>,
        attempts: Arc<dyn QuizAttemptRepository>,
        db: Option<Database>,
    ) -> Self {
        let content_service = Arc::new(ContentService::new(Arc::new(
            StaticContentRepository::new(catalog.clone()),
        )));
        let quiz_service = Arc::new(QuizService::new(Arc::new(StaticQuizRepository::new(
            catalog,
        ))));
        let quiz_attempt_service = Arc::new(QuizAttemptService::new(
            quiz_service.clone(),
            attempts,
            Duration::minutes(config.session_timeout_minutes),
        ));
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Self {
            content_service,
            quiz_service,
            quiz_attempt_service,
            jwt_service,
            db,
            config: Arc::new(config),
        }
    }

    /// In-memory state over the built-in catalog.
    pub fn in_memory(config: Config) -> AppResult<Self> {
        Ok(Self::with_repositories(
            config,
            Arc::new(catalog()?.clone()),
            Arc::new(InMemoryQuizAttemptRepository::new()),
            None,
        ))
    }
}
