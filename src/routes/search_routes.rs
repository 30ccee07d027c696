//! Search proxy endpoint handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::models::document::DocumentRecord;
use crate::state::AppState;
use crate::upstream::dispatch::{dispatch, text_call, SearchRequest};
use crate::utils::http_helpers::{preflight, ProxyError};

/// Registers search routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/search", post(search).options(preflight))
        .route("/api/document", post(document).options(preflight))
}

/// The single abstract proxy endpoint.
///
/// Validates and dispatches the request, forwards it upstream with a bearer
/// token, and relays the upstream JSON body and status verbatim.
async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<impl IntoResponse, ProxyError> {
    debug!("Proxying '{}' request", request.kind);
    let call = dispatch(&request)?;
    let (status, body) = state.upstream.forward(call).await?;
    Ok((status, Json(body)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRequest {
    text_id: String,
}

/// Retrieves one text and returns it as a canonical document record,
/// normalized from the upstream's alternate field spellings.
async fn document(
    State(state): State<AppState>,
    Json(request): Json<DocumentRequest>,
) -> Result<impl IntoResponse, ProxyError> {
    let (_, body) = state.upstream.forward(text_call(&request.text_id)).await?;
    Ok(Json(DocumentRecord::from_upstream(&body)))
}
