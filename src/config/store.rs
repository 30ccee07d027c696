use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for the favorites store.
///
/// When `path` is set, favorites persist in a JSON file at that location;
/// otherwise they live in memory for the lifetime of the process.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone, Default)]
pub struct FavoritesConfig {
    pub path: Option<PathBuf>,
}
