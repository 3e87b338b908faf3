//! Catalog item model: one book or film.

use catalogo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: DbId,
    pub title: String,
    pub creator: String,
    pub year: i32,
    pub genre: String,
    pub details: String,
    pub created_at: Timestamp,
}

/// An item joined with its rating aggregate. Derived at read time,
/// never persisted: `average_rating` is the unweighted mean of the
/// item's rating values (0 when there are none) and `ratings_count`
/// the number of ratings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemWithRatings {
    pub id: DbId,
    pub title: String,
    pub creator: String,
    pub year: i32,
    pub genre: String,
    pub details: String,
    pub created_at: Timestamp,
    pub average_rating: f64,
    pub ratings_count: i64,
}

/// DTO for creating an item. Also the update payload: an update
/// replaces every mutable field (everything except `id` and
/// `created_at`).
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub title: String,
    pub creator: String,
    pub year: i32,
    pub genre: String,
    #[serde(default)]
    pub details: String,
}
