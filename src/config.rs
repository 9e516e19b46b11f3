use crate::data::models::ConfigError;
use crate::features::srs::scheduler::DEFAULT_REVIEW_LIMIT;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub static_dir: String, // Built single-page front end
    pub default_user_id: String,
    pub review_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "lingolab.db".into(),
            bind_addr: "127.0.0.1:5000".into(),
            static_dir: "dist".into(),
            default_user_id: "default_user".into(),
            review_limit: DEFAULT_REVIEW_LIMIT,
        }
    }
}

impl AppConfig {
    /// Reads settings from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let review_limit = match std::env::var("REVIEW_BATCH_LIMIT") {
            Ok(value) => value
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "REVIEW_BATCH_LIMIT",
                    value,
                })?,
            Err(_) => defaults.review_limit,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            default_user_id: std::env::var("DEFAULT_USER_ID").unwrap_or(defaults.default_user_id),
            review_limit,
        })
    }
}
