//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::StorageError;
use board_core::ports::PostRepository;
use board_infra::{DatabaseConfig, SqlitePostRepository, StorageGateway};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub gateway: Arc<StorageGateway>,
}

impl AppState {
    /// Wire the repository onto an already initialized gateway.
    pub fn new(gateway: Arc<StorageGateway>) -> Self {
        let posts = Arc::new(SqlitePostRepository::new(gateway.clone()));
        Self { posts, gateway }
    }

    /// Connect to the store, guarantee schema and seed data, and build the state.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let gateway = Arc::new(StorageGateway::connect(config).await?);
        gateway.initialize().await?;

        tracing::info!("Application state initialized");
        Ok(Self::new(gateway))
    }
}
