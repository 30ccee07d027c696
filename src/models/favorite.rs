use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::document::DocumentRecord;

/// A document the user pinned to their favorites list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub reference: String,
    pub saved_at: DateTime<Utc>,
}

impl Favorite {
    /// Builds a favorite from a normalized document, stamped now.
    pub fn from_document(document: &DocumentRecord) -> Self {
        Favorite {
            id: document.id.clone(),
            title: document.title.clone(),
            reference: document.reference.clone(),
            saved_at: Utc::now(),
        }
    }
}
