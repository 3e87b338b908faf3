//! Rating model: a single 1-5 star score submitted against one item.

use catalogo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ratings` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Rating {
    pub id: DbId,
    pub item_id: DbId,
    pub value: i32,
    pub created_at: Timestamp,
}

/// DTO for submitting a rating. Ratings are never updated or deleted
/// individually; they disappear only when their item is deleted.
#[derive(Debug, Deserialize)]
pub struct CreateRating {
    pub item_id: DbId,
    pub value: i32,
}
