//! Handlers for catalog items.
//!
//! Every read returns items joined with their rating aggregate. Writes
//! validate field-by-field before touching the store, so a validation
//! failure never leaves a partial write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalogo_core::catalog::{validate_creator, validate_genre, validate_title, validate_year};
use catalogo_core::error::CoreError;
use catalogo_core::types::DbId;
use catalogo_db::models::item::CreateItem;
use catalogo_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Validate every field of an item payload, shared by create and update.
fn validate_item_fields(input: &CreateItem) -> Result<(), AppError> {
    validate_title(&input.title).map_err(AppError::BadRequest)?;
    validate_creator(&input.creator).map_err(AppError::BadRequest)?;
    validate_year(input.year).map_err(AppError::BadRequest)?;
    validate_genre(&input.genre).map_err(AppError::BadRequest)?;
    Ok(())
}

/// GET /items
///
/// List all items with rating aggregates, newest first.
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list_with_ratings(&state.pool).await?;
    Ok(Json(items))
}

/// GET /items/{id}
///
/// Get a single item with its rating aggregate.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ItemRepo::find_with_ratings(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    Ok(Json(item))
}

/// GET /items/search/{query}
///
/// Search items by case-insensitive substring on title or creator. An
/// empty query matches everything, so this degrades to the full list.
pub async fn search_items(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::search_with_ratings(&state.pool, &query).await?;
    Ok(Json(items))
}

/// POST /items
///
/// Create a new item.
pub async fn create_item(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateItem>,
) -> AppResult<impl IntoResponse> {
    validate_item_fields(&input)?;

    let item = ItemRepo::create(&state.pool, &input).await?;

    tracing::info!(item_id = item.id, title = %item.title, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /items/{id}
///
/// Replace all mutable fields of an item.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CreateItem>,
) -> AppResult<impl IntoResponse> {
    validate_item_fields(&input)?;

    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    tracing::info!(item_id = id, "Item updated");

    Ok(Json(item))
}

/// DELETE /items/{id}
///
/// Delete an item and, via cascade, all its ratings. Idempotent:
/// deleting an id that does not exist still returns 204.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(item_id = id, "Item deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
