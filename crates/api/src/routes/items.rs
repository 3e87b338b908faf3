//! Route definitions for catalog items. Mounted at `/items` by
//! `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes.
///
/// ```text
/// GET    /items                  -> list_items
/// POST   /items                  -> create_item
/// GET    /items/search/{query}   -> search_items
/// GET    /items/{id}             -> get_item
/// PATCH  /items/{id}             -> update_item
/// DELETE /items/{id}             -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/search/{query}", get(items::search_items))
        .route(
            "/items/{id}",
            get(items::get_item)
                .patch(items::update_item)
                .delete(items::delete_item),
        )
}
