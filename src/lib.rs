use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod schema;
pub mod utils;

use config::AppConfig;
use data::{DbPool, repositories::SqliteRepository};
use features::progress::ProgressService;
use features::srs::{Clock, SrsEngine, SystemClock};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: ProgressService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self::with_clock(pool, config, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: DbPool, config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let repository = Arc::new(SqliteRepository::new(pool));
        let service = ProgressService::new(repository.clone(), repository, SrsEngine::new(clock));

        Self {
            service,
            config: Arc::new(config),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let api_router = Router::new()
        .nest("/progress", handlers::progress::progress_router(state.clone()))
        .nest("/words", handlers::words::words_router(state));

    Router::new()
        .nest("/api/v1", api_router)
        // Single-page front end
        .fallback_service(ServeDir::new(static_dir))
}
