//! Application state

use presence_core::repository::{PlayerRepository, PostgresPlayerRepository};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Player storage
    pub players: Arc<dyn PlayerRepository>,
}

impl AppState {
    /// Create new application state backed by PostgreSQL.
    ///
    /// The pool connects lazily, so an unreachable database surfaces on the
    /// first request instead of at startup.
    pub fn new(config: &AppConfig) -> Self {
        let pool = PgPoolOptions::new().connect_lazy_with(config.connect_options());

        Self::with_repository(Arc::new(PostgresPlayerRepository::new(pool)))
    }

    /// Create state over any repository implementation
    pub fn with_repository(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }
}
