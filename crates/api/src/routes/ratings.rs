//! Route definitions for ratings. Mounted by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ratings;
use crate::state::AppState;

/// Rating routes.
///
/// ```text
/// POST /ratings              -> create_rating
/// GET  /items/{id}/ratings   -> list_item_ratings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ratings", post(ratings::create_rating))
        .route("/items/{id}/ratings", get(ratings::list_item_ratings))
}
