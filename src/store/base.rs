use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::{file_store::FileStore, memory_store::MemoryStore};
use crate::config::FavoritesConfig;
use crate::models::favorite::Favorite;

/// The FavoritesStore trait abstracts favorites storage (list, add, remove).
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Favorite>, String>;
    /// Adds a favorite. Returns `Ok(false)` without writing when a favorite
    /// with the same id is already present.
    async fn add(&self, favorite: &Favorite) -> Result<bool, String>;
    /// Removes the favorite with the given id. Returns `Ok(false)` when no
    /// such favorite exists.
    async fn remove(&self, id: &str) -> Result<bool, String>;
}

/// Creates a concrete store implementation based on the FavoritesConfig.
/// With a configured path, favorites go to a JSON file; otherwise in memory.
pub async fn create_store(config: &FavoritesConfig) -> Arc<dyn FavoritesStore> {
    match &config.path {
        Some(path) => match FileStore::new(path.clone()).await {
            Ok(store) => {
                info!("Persisting favorites to {}", path.display());
                Arc::new(store)
            }
            Err(e) => {
                error!("Failed to open favorites file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            info!("No favorites path configured. Using in-memory store.");
            Arc::new(MemoryStore::new())
        }
    }
}
