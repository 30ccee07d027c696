//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration, the OAuth token cache, the upstream client,
//! and the favorites store.

use std::sync::Arc;

use crate::auth::TokenCache;
use crate::config::ConfigV1;
use crate::store::FavoritesStore;
use crate::upstream::UpstreamClient;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler and contains
/// references to the configuration, the process-wide token cache,
/// the upstream API client, and the favorites store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Process-wide OAuth token cache, injected rather than global.
    pub tokens: Arc<TokenCache>,
    /// Client for the upstream legal-data API.
    pub upstream: UpstreamClient,
    /// Store for the user's favorites list.
    pub favorites: Arc<dyn FavoritesStore>,
}
