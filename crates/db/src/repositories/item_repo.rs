//! Repository for the `items` table, including the rating aggregate
//! queries used by every read operation.

use sqlx::PgPool;

use catalogo_core::types::DbId;

use crate::models::item::{CreateItem, Item, ItemWithRatings};

/// Column list for plain item queries.
const COLUMNS: &str = "id, title, creator, year, genre, details, created_at";

/// Column list for aggregate queries. The LEFT JOIN keeps items with
/// zero ratings, and GROUP BY takes each item's base columns exactly
/// once. COALESCE pins the no-ratings average at 0 rather than NULL;
/// the cast makes AVG's NUMERIC result a stable f64 column.
const AGGREGATE_COLUMNS: &str = "items.id, items.title, items.creator, items.year, \
    items.genre, items.details, items.created_at, \
    COALESCE(AVG(ratings.value), 0)::DOUBLE PRECISION AS average_rating, \
    COUNT(ratings.id) AS ratings_count";

/// Ordering shared by all multi-item reads: newest first, ties broken
/// by insertion order.
const ORDERING: &str = "ORDER BY items.created_at DESC, items.id ASC";

/// Provides CRUD and aggregate read operations for catalog items.
pub struct ItemRepo;

impl ItemRepo {
    /// Create a new item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (title, creator, year, genre, details)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.title)
            .bind(&input.creator)
            .bind(input.year)
            .bind(&input.genre)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its ID, without the rating aggregate.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace all mutable fields of an item, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET title = $2, creator = $3, year = $4, genre = $5, details = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.creator)
            .bind(input.year)
            .bind(&input.genre)
            .bind(&input.details)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. The `ON DELETE CASCADE` on `ratings.item_id`
    /// removes its ratings within the same statement. Returns `true` if a
    /// row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all items with their rating aggregates, newest first.
    pub async fn list_with_ratings(pool: &PgPool) -> Result<Vec<ItemWithRatings>, sqlx::Error> {
        let query = format!(
            "SELECT {AGGREGATE_COLUMNS}
             FROM items
             LEFT JOIN ratings ON ratings.item_id = items.id
             GROUP BY items.id
             {ORDERING}"
        );
        sqlx::query_as::<_, ItemWithRatings>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a single item with its rating aggregate.
    pub async fn find_with_ratings(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ItemWithRatings>, sqlx::Error> {
        let query = format!(
            "SELECT {AGGREGATE_COLUMNS}
             FROM items
             LEFT JOIN ratings ON ratings.item_id = items.id
             WHERE items.id = $1
             GROUP BY items.id"
        );
        sqlx::query_as::<_, ItemWithRatings>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search items by case-insensitive substring on title or creator,
    /// with the same aggregate and ordering as [`Self::list_with_ratings`].
    /// The empty query matches every item.
    pub async fn search_with_ratings(
        pool: &PgPool,
        query_str: &str,
    ) -> Result<Vec<ItemWithRatings>, sqlx::Error> {
        let pattern = format!("%{query_str}%");
        let query = format!(
            "SELECT {AGGREGATE_COLUMNS}
             FROM items
             LEFT JOIN ratings ON ratings.item_id = items.id
             WHERE items.title ILIKE $1 OR items.creator ILIKE $1
             GROUP BY items.id
             {ORDERING}"
        );
        sqlx::query_as::<_, ItemWithRatings>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }
}
