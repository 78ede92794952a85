//! Repository for the `vehicles` table.

use sqlx::PgPool;

use renteria_core::types::DbId;

use crate::models::vehicle::{UpdateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, plate, model_id, year, store_id, created_at, updated_at";

/// Provides CRUD operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    ///
    /// `plate` is already normalized (upper-cased, pattern-checked) by the
    /// caller via `renteria_core::vehicles::normalize_plate`.
    pub async fn create(
        pool: &PgPool,
        plate: &str,
        model_id: DbId,
        year: i32,
        store_id: Option<DbId>,
    ) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (plate, model_id, year, store_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(plate)
            .bind(model_id)
            .bind(year)
            .bind(store_id)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vehicles ordered by plate.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY plate");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// List the vehicles attached to stores owned by one user.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.plate, v.model_id, v.year, v.store_id, v.created_at, v.updated_at
             FROM vehicles v
             JOIN stores s ON s.id = v.store_id
             WHERE s.owner_id = $1
             ORDER BY v.plate"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// List the vehicles parked at one store, ordered by plate.
    pub async fn list_by_store(pool: &PgPool, store_id: DbId) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE store_id = $1 ORDER BY plate");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(store_id)
            .fetch_all(pool)
            .await
    }

    /// Update a vehicle. Only non-`None` fields in `input` are applied;
    /// the plate, when present, is already normalized by the caller.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                plate = COALESCE($2, plate),
                model_id = COALESCE($3, model_id),
                year = COALESCE($4, year),
                store_id = COALESCE($5, store_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.plate)
            .bind(input.model_id)
            .bind(input.year)
            .bind(input.store_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vehicle by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
