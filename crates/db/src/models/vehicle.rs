//! Vehicle entity model and DTOs.

use renteria_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `vehicles` table. Plates are stored upper-cased.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub plate: String,
    pub model_id: DbId,
    pub year: i32,
    pub store_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new vehicle.
///
/// Plate format and year bounds are validated by `renteria_core::vehicles`
/// before the insert; the repository receives the normalized plate.
#[derive(Debug, Deserialize)]
pub struct CreateVehicle {
    pub plate: String,
    pub model_id: DbId,
    pub year: i32,
    pub store_id: Option<DbId>,
}

/// DTO for updating an existing vehicle. Only non-`None` fields are applied;
/// detaching from a store happens via store deletion (FK is SET NULL).
#[derive(Debug, Deserialize)]
pub struct UpdateVehicle {
    pub plate: Option<String>,
    pub model_id: Option<DbId>,
    pub year: Option<i32>,
    pub store_id: Option<DbId>,
}
