use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::database::{MemoryProfileStore, PgProfileStore, ProfileStore, StoreError};

/// Shared handles every handler receives
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(Arc::new(MemoryProfileStore::new()), config)
    }

    /// PostgreSQL when a database URL is configured, memory otherwise.
    pub async fn from_config(config: AppConfig) -> Result<Self, StoreError> {
        match config.database.url {
            Some(_) => {
                let store = PgProfileStore::connect(&config.database).await?;
                Ok(Self::new(Arc::new(store), config))
            }
            None => {
                warn!("DATABASE_URL not set; profiles are kept in memory and lost on restart");
                let state = Self::in_memory(config);
                info!("Using {} profile store", state.store.backend());
                Ok(state)
            }
        }
    }
}
