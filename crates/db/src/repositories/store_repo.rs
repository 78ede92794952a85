//! Repository for the `stores` table.

use sqlx::PgPool;

use renteria_core::types::DbId;

use crate::models::store::{Store, UpdateStore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, owner_id, created_at, updated_at";

/// Provides CRUD operations for stores.
pub struct StoreRepo;

impl StoreRepo {
    /// Insert a new store for `owner_id`, returning the created row.
    ///
    /// The caller has already resolved who the owner is and checked the
    /// owner holds the franchisee role.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        address: Option<&str>,
        owner_id: DbId,
    ) -> Result<Store, sqlx::Error> {
        let query = format!(
            "INSERT INTO stores (name, address, owner_id) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(name)
            .bind(address)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a store by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stores WHERE id = $1");
        sqlx::query_as::<_, Store>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stores ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stores ORDER BY name");
        sqlx::query_as::<_, Store>(&query).fetch_all(pool).await
    }

    /// List the stores owned by one user, ordered by name.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stores WHERE owner_id = $1 ORDER BY name");
        sqlx::query_as::<_, Store>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a store. Only non-`None` fields in `input` are applied;
    /// ownership never changes here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStore,
    ) -> Result<Option<Store>, sqlx::Error> {
        let query = format!(
            "UPDATE stores SET
                name = COALESCE($2, name),
                address = COALESCE($3, address)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete a store by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
