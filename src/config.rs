use std::{env, str::FromStr};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const DEFAULT_JWT_SECRET: &str = "dev_secret_key_change_in_production";

/// Backing store for the quiz attempt log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptStore {
    Memory,
    Mongo,
}

impl FromStr for AttemptStore {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(AttemptStore::Memory),
            "mongo" | "mongodb" => Ok(AttemptStore::Mongo),
            other => Err(AppError::ValidationError(format!(
                "Unknown attempt store '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub attempt_store: AttemptStore,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub attempts_collection: String,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub session_timeout_minutes: i64,
    pub seed_demo_data: bool,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            attempt_store: env::var("ATTEMPT_STORE")
                .ok()
                .and_then(|s| match s.parse() {
                    Ok(store) => Some(store),
                    Err(err) => {
                        log::warn!("{}; falling back to in-memory attempt store", err);
                        None
                    }
                })
                .unwrap_or(AttemptStore::Memory),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "nyaya-local".to_string()),
            attempts_collection: env::var("ATTEMPTS_COLLECTION")
                .unwrap_or_else(|_| "quiz_attempts".to_string()),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            session_timeout_minutes: env::var("SESSION_TIMEOUT_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(60),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }

    /// Rejects configuration that must never reach a deployed server.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEFAULT_JWT_SECRET {
            return Err(AppError::ValidationError(
                "JWT_SECRET is using the default value".to_string(),
            ));
        }

        if jwt_secret.len() < 32 {
            return Err(AppError::ValidationError(format!(
                "JWT_SECRET is too short ({}); must be at least 32 characters",
                jwt_secret.len()
            )));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            attempt_store: AttemptStore::Memory,
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "nyaya-test".to_string(),
            attempts_collection: "quiz_attempts".to_string(),
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            session_timeout_minutes: 60,
            seed_demo_data: false,
            cors_allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.attempts_collection.is_empty());
        assert!(config.jwt_expiration_hours > 0);
        assert!(config.session_timeout_minutes > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.attempt_store, AttemptStore::Memory);
        assert_eq!(config.mongo_db_name, "nyaya-test");
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_attempt_store_parsing() {
        assert_eq!("memory".parse::<AttemptStore>().unwrap(), AttemptStore::Memory);
        assert_eq!("MongoDB".parse::<AttemptStore>().unwrap(), AttemptStore::Mongo);
        assert!("redis".parse::<AttemptStore>().is_err());
    }

    #[test]
    fn test_production_validation_rejects_weak_secrets() {
        let mut config = Config::test_config();
        assert!(config.validate_for_production().is_err());

        config.jwt_secret = SecretString::from(DEFAULT_JWT_SECRET.to_string());
        assert!(config.validate_for_production().is_err());

        config.jwt_secret = SecretString::from("a".repeat(40));
        assert!(config.validate_for_production().is_ok());
    }
}
