//! Repository for the `makes` table.

use sqlx::PgPool;

use renteria_core::types::DbId;

use crate::models::make::{CreateMake, Make, UpdateMake};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, logo, created_at, updated_at";

/// Provides CRUD operations for makes.
pub struct MakeRepo;

impl MakeRepo {
    /// Insert a new make, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMake) -> Result<Make, sqlx::Error> {
        let query = format!("INSERT INTO makes (name, logo) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Make>(&query)
            .bind(&input.name)
            .bind(&input.logo)
            .fetch_one(pool)
            .await
    }

    /// Find a make by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Make>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM makes WHERE id = $1");
        sqlx::query_as::<_, Make>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all makes ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Make>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM makes ORDER BY name");
        sqlx::query_as::<_, Make>(&query).fetch_all(pool).await
    }

    /// Update a make. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMake,
    ) -> Result<Option<Make>, sqlx::Error> {
        let query = format!(
            "UPDATE makes SET
                name = COALESCE($2, name),
                logo = COALESCE($3, logo)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Make>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.logo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a make by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM makes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
