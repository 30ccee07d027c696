use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use serde_json::Value;

use lexgate::auth::TokenCache;
use lexgate::config::{Config, ConfigV1};
use lexgate::routes::create_router;
use lexgate::state::AppState;
use lexgate::store::create_store;
use lexgate::upstream::UpstreamClient;

/// Builds a config pointing the gateway at a test double of both the
/// identity provider (`<url>/token`) and the legal-data API (`<url>`).
pub fn gateway_config(
    upstream_url: &str,
    with_credentials: bool,
    favorites_path: Option<&str>,
) -> ConfigV1 {
    let credentials = if with_credentials {
        r#"{ client_id: "client", client_secret: "secret" }"#
    } else {
        "{}"
    };
    let favorites = match favorites_path {
        Some(path) => format!(r#"{{ path: "{}" }}"#, path),
        None => "{}".to_string(),
    };
    let yaml = format!(
        r#"
version: "1.0.0"
bind_address: "127.0.0.1:0"
logging:
  level: "debug"
  format: "console"
credentials: {credentials}
upstream:
  token_url: "{upstream_url}/token"
  api_base_url: "{upstream_url}"
favorites: {favorites}
"#
    );

    let config = Figment::new()
        .merge(Yaml::string(&yaml))
        .extract::<Config>()
        .expect("test config should parse");
    match config {
        Config::ConfigV1(c) => c,
    }
}

pub async fn build_app(config: ConfigV1) -> Router {
    let config = Arc::new(config);
    let favorites = create_store(&config.favorites).await;
    let tokens = Arc::new(TokenCache::new(
        config.upstream.token_url.clone(),
        config.credentials.clone(),
    ));
    let upstream = UpstreamClient::new(config.upstream.api_base_url.clone(), tokens.clone());

    create_router(AppState {
        config,
        tokens,
        upstream,
        favorites,
    })
}

pub fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
