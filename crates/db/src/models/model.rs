//! Model (car model) entity and DTOs.

use renteria_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Model {
    pub id: DbId,
    pub name: String,
    pub make_id: DbId,
    pub category_id: DbId,
    /// Picture URL shown in listings.
    pub picture: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Model row joined with its make and category names, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModelWithNames {
    pub id: DbId,
    pub name: String,
    pub make_id: DbId,
    pub make_name: String,
    pub category_id: DbId,
    pub category_name: String,
    pub picture: Option<String>,
}

/// DTO for creating a new model.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateModel {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    pub make_id: DbId,
    pub category_id: DbId,
    #[validate(url)]
    pub picture: Option<String>,
}

/// DTO for updating an existing model.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateModel {
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
    pub make_id: Option<DbId>,
    pub category_id: Option<DbId>,
    #[validate(url)]
    pub picture: Option<String>,
}
