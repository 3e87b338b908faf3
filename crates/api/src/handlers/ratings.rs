//! Handlers for rating submission and retrieval.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalogo_core::catalog::validate_rating_value;
use catalogo_core::error::CoreError;
use catalogo_core::types::DbId;
use catalogo_db::models::rating::CreateRating;
use catalogo_db::repositories::{ItemRepo, RatingRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /ratings
///
/// Submit a 1-5 star rating against an item. The value is validated and
/// the item's existence checked before the insert; an item deleted
/// between the check and the insert surfaces as a sanitized store
/// failure via the FK constraint.
pub async fn create_rating(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRating>,
) -> AppResult<impl IntoResponse> {
    validate_rating_value(input.value).map_err(AppError::BadRequest)?;

    ItemRepo::find_by_id(&state.pool, input.item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Item",
            id: input.item_id,
        }))?;

    let rating = RatingRepo::create(&state.pool, &input).await?;

    tracing::info!(
        rating_id = rating.id,
        item_id = rating.item_id,
        value = rating.value,
        "Rating submitted"
    );

    Ok(StatusCode::CREATED)
}

/// GET /items/{id}/ratings
///
/// List the raw rating values for an item. Returns an empty list for
/// unknown or unrated items.
pub async fn list_item_ratings(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let values = RatingRepo::list_values(&state.pool, id).await?;
    Ok(Json(values))
}
