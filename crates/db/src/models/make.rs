//! Make entity model and DTOs.

use renteria_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `makes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Make {
    pub id: DbId,
    pub name: String,
    /// Logo URL shown next to the make in listings.
    pub logo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new make.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMake {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    #[validate(url)]
    pub logo: Option<String>,
}

/// DTO for updating an existing make.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMake {
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
    #[validate(url)]
    pub logo: Option<String>,
}
