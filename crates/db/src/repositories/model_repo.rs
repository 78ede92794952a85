//! Repository for the `models` table.

use sqlx::PgPool;

use renteria_core::types::DbId;

use crate::models::model::{CreateModel, Model, ModelWithNames, UpdateModel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, make_id, category_id, picture, created_at, updated_at";

/// Joined column list for listings that show make/category names.
const JOINED_COLUMNS: &str = "m.id, m.name, m.make_id, mk.name AS make_name, \
                              m.category_id, c.name AS category_name, m.picture";

/// Provides CRUD operations for models.
pub struct ModelRepo;

impl ModelRepo {
    /// Insert a new model, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateModel) -> Result<Model, sqlx::Error> {
        let query = format!(
            "INSERT INTO models (name, make_id, category_id, picture)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(&input.name)
            .bind(input.make_id)
            .bind(input.category_id)
            .bind(&input.picture)
            .fetch_one(pool)
            .await
    }

    /// Find a model by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all models with their make and category names, ordered by name.
    pub async fn list_with_names(pool: &PgPool) -> Result<Vec<ModelWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM models m
             JOIN makes mk ON mk.id = m.make_id
             JOIN categories c ON c.id = m.category_id
             ORDER BY m.name"
        );
        sqlx::query_as::<_, ModelWithNames>(&query).fetch_all(pool).await
    }

    /// List the models belonging to a category, ordered by name.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE category_id = $1 ORDER BY name");
        sqlx::query_as::<_, Model>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update a model. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateModel,
    ) -> Result<Option<Model>, sqlx::Error> {
        let query = format!(
            "UPDATE models SET
                name = COALESCE($2, name),
                make_id = COALESCE($3, make_id),
                category_id = COALESCE($4, category_id),
                picture = COALESCE($5, picture)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.make_id)
            .bind(input.category_id)
            .bind(&input.picture)
            .fetch_optional(pool)
            .await
    }

    /// Delete a model by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
