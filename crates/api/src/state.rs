use std::sync::Arc;

use gazette_core::validation::FieldValidator;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gazette_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Compiled page templates.
    pub views: Arc<Views>,
    /// Validation strategy selected by `config.validation`.
    pub validator: &'static dyn FieldValidator,
}

impl AppState {
    pub fn new(pool: gazette_db::DbPool, config: ServerConfig, views: Views) -> Self {
        let validator = config.validation.validator();
        Self {
            pool,
            config: Arc::new(config),
            views: Arc::new(views),
            validator,
        }
    }
}
