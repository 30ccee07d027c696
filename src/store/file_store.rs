use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use super::FavoritesStore;
use crate::models::favorite::Favorite;

/// Fixed key the favorites array is stored under, mirroring the browser-local
/// storage key of the original client.
const STORAGE_KEY: &str = "lexgate_favorites";

/// A favorites store backed by a single JSON file.
///
/// The whole list is read and rewritten on every mutation; favorites lists
/// are tiny and this keeps the on-disk state a plain document a person can
/// inspect. The mutex serializes mutations within this process.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Opens the store, validating any existing file.
    pub async fn new(path: PathBuf) -> Result<Self, String> {
        let store = FileStore {
            path,
            lock: Mutex::new(()),
        };
        store.load().await?;
        Ok(store)
    }

    async fn load(&self) -> Result<Vec<Favorite>, String> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| format!("Error reading favorites file: {}", e))?;
        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| format!("Error parsing favorites file: {}", e))?;
        match document.get(STORAGE_KEY) {
            Some(array) => serde_json::from_value(array.clone())
                .map_err(|e| format!("Error parsing favorites list: {}", e)),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, favorites: &[Favorite]) -> Result<(), String> {
        let document = json!({ STORAGE_KEY: favorites });
        let raw = serde_json::to_string_pretty(&document)
            .map_err(|e| format!("Error encoding favorites: {}", e))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| format!("Error writing favorites file: {}", e))
    }
}

#[async_trait]
impl FavoritesStore for FileStore {
    async fn list(&self) -> Result<Vec<Favorite>, String> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn add(&self, favorite: &Favorite) -> Result<bool, String> {
        let _guard = self.lock.lock().await;
        let mut favorites = self.load().await?;
        if favorites.iter().any(|f| f.id == favorite.id) {
            return Ok(false);
        }
        favorites.push(favorite.clone());
        self.save(&favorites).await?;
        Ok(true)
    }

    async fn remove(&self, id: &str) -> Result<bool, String> {
        let _guard = self.lock.lock().await;
        let mut favorites = self.load().await?;
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        if favorites.len() == before {
            return Ok(false);
        }
        self.save(&favorites).await?;
        Ok(true)
    }
}
