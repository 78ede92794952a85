//! Category entity model and DTOs.

use renteria_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub fare: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    /// Daily fare. Defaults to 100.0 when omitted.
    #[validate(range(min = 0.0))]
    pub fare: Option<f64>,
}

/// DTO for updating an existing category. Only non-`None` fields are applied.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub fare: Option<f64>,
}
