use std::sync::Mutex;

use async_trait::async_trait;

use super::FavoritesStore;
use crate::models::favorite::Favorite;

/// A process-lifetime favorites store with no persistence.
pub struct MemoryStore {
    favorites: Mutex<Vec<Favorite>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            favorites: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoritesStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Favorite>, String> {
        Ok(self.favorites.lock().unwrap().clone())
    }

    async fn add(&self, favorite: &Favorite) -> Result<bool, String> {
        let mut favorites = self.favorites.lock().unwrap();
        if favorites.iter().any(|f| f.id == favorite.id) {
            return Ok(false);
        }
        favorites.push(favorite.clone());
        Ok(true)
    }

    async fn remove(&self, id: &str) -> Result<bool, String> {
        let mut favorites = self.favorites.lock().unwrap();
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        Ok(favorites.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentRecord;
    use serde_json::json;

    fn favorite(id: &str) -> Favorite {
        Favorite::from_document(&DocumentRecord::from_upstream(&json!({
            "id": id,
            "titreTexte": "Code du travail",
            "typeTexte": "CODE",
        })))
    }

    /// Test that an added favorite comes back from list exactly once.
    #[tokio::test]
    async fn test_add_then_list() {
        let store = MemoryStore::new();
        assert!(store.add(&favorite("LEGI-1")).await.unwrap());
        let favorites = store.list().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "LEGI-1");
    }

    /// Test that adding the same id twice is a no-op.
    #[tokio::test]
    async fn test_duplicate_add_is_rejected() {
        let store = MemoryStore::new();
        assert!(store.add(&favorite("LEGI-1")).await.unwrap());
        assert!(!store.add(&favorite("LEGI-1")).await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    /// Test removal of present and absent ids.
    #[tokio::test]
    async fn test_remove() {
        let store = MemoryStore::new();
        store.add(&favorite("LEGI-1")).await.unwrap();
        assert!(store.remove("LEGI-1").await.unwrap());
        assert!(!store.remove("LEGI-1").await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }
}
