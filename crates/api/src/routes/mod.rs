pub mod health;
pub mod items;
pub mod ratings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                      list (GET), create (POST)
/// /items/search/{query}       search by title or creator (GET)
/// /items/{id}                 get (GET), update (PATCH), delete (DELETE)
/// /items/{id}/ratings         raw rating values (GET)
/// /ratings                    submit a rating (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(items::router())
        .merge(ratings::router())
}
