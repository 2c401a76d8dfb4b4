//! Item CRUD handlers.
//!
//! Protocol translation only: verbs and paths dispatch onto the item
//! service and its results map to statuses and JSON bodies. Request
//! bodies are taken as raw bytes so the blob store receives the exact
//! payload the client sent.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use itemvault_core::item::{Item, ItemError};

use crate::{handlers::ApiError, state::AppState};

/// Get an item by id (GET /item/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.read(&id).await?;
    Ok(Json(item))
}

/// Create a new item from the raw request body (POST /item).
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    state.items.create(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Item created" })),
    ))
}

/// Update an existing item from the raw request body (PUT /item).
pub async fn update_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.items.update(&body).await?;
    Ok(Json(json!({ "message": "Item updated" })))
}

/// Delete an item by id (DELETE /item/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.items.delete(&id).await?;
    Ok(Json(json!({ "message": "Item deleted" })))
}

/// Reject item routes that carry no id segment.
pub async fn missing_item_id() -> ApiError {
    ApiError(ItemError::MissingId.into())
}

/// Reject paths outside the item API (router fallback).
pub async fn invalid_endpoint() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Invalid endpoint" })),
    )
}
