//! Shared application state for all routes.

use crate::config::AppConfig;
use sqlx::AnyPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: AnyPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
