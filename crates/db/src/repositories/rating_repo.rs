//! Repository for the `ratings` table.

use sqlx::PgPool;

use catalogo_core::types::DbId;

use crate::models::rating::{CreateRating, Rating};

/// Column list for ratings queries.
const COLUMNS: &str = "id, item_id, value, created_at";

/// Provides insert and read operations for ratings. There is no update
/// or single-row delete: ratings only disappear when their item does.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a rating, returning the created row. A single INSERT, so
    /// concurrent submissions against the same item are commutative.
    pub async fn create(pool: &PgPool, input: &CreateRating) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO ratings (item_id, value)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(input.item_id)
            .bind(input.value)
            .fetch_one(pool)
            .await
    }

    /// List the raw rating values for an item, oldest first. Empty for
    /// unknown or unrated items.
    pub async fn list_values(pool: &PgPool, item_id: DbId) -> Result<Vec<i32>, sqlx::Error> {
        let rows: Vec<(i32,)> =
            sqlx::query_as("SELECT value FROM ratings WHERE item_id = $1 ORDER BY id ASC")
                .bind(item_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(value,)| value).collect())
    }
}
