use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::HeaderValue;
use serde_json::json;

/// The error taxonomy of the gateway. Every variant converts into a
/// structured JSON response carrying a `success: false` marker; none of
/// them is fatal to the process.
#[derive(Debug)]
pub enum ProxyError {
    /// A required secret is missing from the configuration.
    Configuration(String),
    /// The client sent a request we refuse before any network call.
    Validation(String),
    /// The identity provider rejected the credential exchange.
    AuthExchange { status: StatusCode, body: String },
    /// The legal-data API answered with a non-2xx status.
    Upstream { status: StatusCode, body: String },
    /// A fetch-level failure (DNS, connect, body read).
    Network(String),
}

impl std::fmt::Display for ProxyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProxyError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            ProxyError::Validation(msg) => write!(f, "validation error: {}", msg),
            ProxyError::AuthExchange { status, body } => {
                write!(f, "token exchange failed with {}: {}", status, body)
            }
            ProxyError::Upstream { status, body } => {
                write!(f, "upstream API error {}: {}", status, body)
            }
            ProxyError::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

impl std::error::Error for ProxyError {}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        ProxyError::Network(e.to_string())
    }
}

/// Converts a `ProxyError` into an HTTP response.
///
/// Upstream-class errors keep the upstream status code and carry the raw
/// upstream body under `details`, so the caller sees what the API saw.
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ProxyError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": msg, "success": false }),
            ),
            ProxyError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "success": false }),
            ),
            ProxyError::AuthExchange { status, body } => (
                status,
                json!({
                    "error": format!("Token exchange failed: {}", status.as_u16()),
                    "details": body,
                    "success": false,
                }),
            ),
            ProxyError::Upstream { status, body } => (
                status,
                json!({
                    "error": format!("Upstream API error: {}", status.as_u16()),
                    "details": body,
                    "success": false,
                }),
            ),
            ProxyError::Network(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Network error", "message": msg, "success": false }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Middleware attaching permissive CORS headers to every response,
/// preflight included. The original client is a static browser page served
/// from a different origin.
pub async fn with_cors(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, DELETE, OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// Answers a CORS preflight with an empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
