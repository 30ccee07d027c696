//! Application startup and server initialization.
//!
//! This module handles the creation and configuration of the HTTP server,
//! including initialization of the token cache, favorites store, and route setup.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::auth::TokenCache;
use crate::config::ConfigV1;
use crate::routes;
use crate::state::AppState;
use crate::store::create_store;
use crate::upstream::UpstreamClient;

/// Initializes and runs the gateway server.
///
/// Sets up the OAuth token cache, the favorites store, and the HTTP server
/// with configured routes. Binds to the address specified in the configuration
/// and starts serving requests.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let favorites = create_store(&config.favorites).await;
    let tokens = Arc::new(TokenCache::new(
        config.upstream.token_url.clone(),
        config.credentials.clone(),
    ));
    let upstream = UpstreamClient::new(config.upstream.api_base_url.clone(), tokens.clone());

    info!("Starting server on {}", config.bind_address);

    let state = AppState {
        config: config.clone(),
        tokens,
        upstream,
        favorites,
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .expect("Could not bind to specified address");

    axum::serve(listener, app).await?;

    Ok(())
}
