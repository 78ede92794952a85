//! Store entity model and DTOs.

use renteria_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `stores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Store {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new store.
///
/// `owner_id` is only honoured for admin callers; a franchisee always
/// becomes the owner of the store they create.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStore {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(max = 128))]
    pub address: Option<String>,
    pub owner_id: Option<DbId>,
}

/// DTO for updating an existing store. Ownership does not change on update.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStore {
    #[validate(length(min = 1, max = 60))]
    pub name: Option<String>,
    #[validate(length(max = 128))]
    pub address: Option<String>,
}
