//! Favorites endpoint handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::models::document::DocumentRecord;
use crate::models::favorite::Favorite;
use crate::state::AppState;
use crate::utils::http_helpers::preflight;

/// Registers favorites routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/favorites",
            get(list_favorites).post(add_favorite).options(preflight),
        )
        .route(
            "/api/favorites/:id",
            delete(remove_favorite).options(preflight),
        )
}

/// Maps store errors to an HTTP response.
fn map_store_error(e: String) -> (StatusCode, Json<Value>) {
    tracing::error!("Favorites store error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("Store error: {}", e), "success": false })),
    )
}

/// Lists the saved favorites.
async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let favorites = state.favorites.list().await.map_err(map_store_error)?;
    Ok(Json(json!({ "favorites": favorites })))
}

/// Saves a document to the favorites list.
///
/// The body is the document as the upstream API returned it; it is
/// normalized here before being stored. Adding an id that is already present
/// changes nothing and answers 409 so the client can tell the user.
async fn add_favorite(
    State(state): State<AppState>,
    Json(document): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let record = DocumentRecord::from_upstream(&document);
    if record.id.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Document has no id", "success": false })),
        ));
    }

    let favorite = Favorite::from_document(&record);
    if state
        .favorites
        .add(&favorite)
        .await
        .map_err(map_store_error)?
    {
        Ok((
            StatusCode::CREATED,
            Json(json!({ "favorite": favorite, "success": true })),
        ))
    } else {
        Err((
            StatusCode::CONFLICT,
            Json(json!({ "error": "Already in favorites", "success": false })),
        ))
    }
}

/// Removes one favorite by id.
async fn remove_favorite(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if state.favorites.remove(&id).await.map_err(map_store_error)? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Favorite not found", "success": false })),
        ))
    }
}
