//! Repository for the `plants` table.

use plantsy_core::price::Price;
use plantsy_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::plant::{NewPlant, Plant, PlantChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image, price_cents, is_in_stock";

/// Provides CRUD operations for plants.
pub struct PlantRepo;

impl PlantRepo {
    /// Insert a new plant, returning the created row with its assigned id.
    pub async fn create(pool: &SqlitePool, input: &NewPlant) -> Result<Plant, sqlx::Error> {
        let query = format!(
            "INSERT INTO plants (name, image, price_cents, is_in_stock)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plant>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .bind(input.price.map(Price::cents))
            .bind(input.is_in_stock)
            .fetch_one(pool)
            .await
    }

    /// Find a plant by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Plant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants WHERE id = ?1");
        sqlx::query_as::<_, Plant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every plant in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Plant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants ORDER BY id");
        sqlx::query_as::<_, Plant>(&query).fetch_all(pool).await
    }

    /// Apply a partial update in a single statement.
    ///
    /// `name` uses `COALESCE` since it cannot be cleared. The other columns
    /// take a "provided" flag so an explicit null overwrites the stored value
    /// while an absent key keeps it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        changes: &PlantChanges,
    ) -> Result<Option<Plant>, sqlx::Error> {
        let image_provided = changes.image.is_some();
        let image_value = changes.image.as_ref().and_then(|v| v.as_deref());
        let price_provided = changes.price.is_some();
        let price_value = changes.price.flatten().map(Price::cents);
        let stock_provided = changes.is_in_stock.is_some();
        let stock_value = changes.is_in_stock.flatten();

        let query = format!(
            "UPDATE plants SET
                 name        = COALESCE(?2, name),
                 image       = CASE WHEN ?3 THEN ?4 ELSE image END,
                 price_cents = CASE WHEN ?5 THEN ?6 ELSE price_cents END,
                 is_in_stock = CASE WHEN ?7 THEN ?8 ELSE is_in_stock END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plant>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(image_provided)
            .bind(image_value)
            .bind(price_provided)
            .bind(price_value)
            .bind(stock_provided)
            .bind(stock_value)
            .fetch_optional(pool)
            .await
    }

    /// Delete a plant by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plants WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
