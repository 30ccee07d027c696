//! Bearer-authenticated client for the upstream legal-data API.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::TokenCache;
use crate::upstream::dispatch::UpstreamCall;
use crate::utils::http_helpers::ProxyError;

/// Forwards dispatched calls to the upstream API, relaying the JSON answer
/// verbatim. A 401 from upstream drops the cached token; the failing call is
/// not retried, the next request re-authenticates.
#[derive(Clone)]
pub struct UpstreamClient {
    api_base_url: String,
    tokens: Arc<TokenCache>,
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(api_base_url: String, tokens: Arc<TokenCache>) -> Self {
        UpstreamClient {
            api_base_url,
            tokens,
            http: reqwest::Client::new(),
        }
    }

    /// Issues exactly one upstream call and returns the upstream status and
    /// JSON body untouched.
    pub async fn forward(&self, call: UpstreamCall) -> Result<(StatusCode, Value), ProxyError> {
        let token = self.tokens.bearer().await?;
        let url = format!("{}{}", self.api_base_url, call.path);

        debug!("Forwarding request to {}", url);
        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", token))
            .json(&call.body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream API error {}: {}", status, body);
            if status == StatusCode::UNAUTHORIZED {
                // The token expired upstream despite our safety margin.
                self.tokens.invalidate();
            }
            return Err(ProxyError::Upstream { status, body });
        }

        let body: Value = response.json().await?;
        Ok((status, body))
    }
}
