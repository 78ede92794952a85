//! Duplicate-name guard for natural keys.
//!
//! Every entity with a business-meaningful unique field (name, email,
//! plate) runs through [`DuplicateGuard::check_unique`] before an insert or
//! a rename. The guard reports a structured conflict instead of letting the
//! caller trip over a bare constraint error; the `uq_*` constraints remain
//! in place for writers that race past the pre-check, and the API layer
//! classifies those to the same conflict response.

use sqlx::PgPool;

use renteria_core::types::DbId;

/// A natural key the guard knows how to check, mapped to its table/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturalKey {
    CategoryName,
    MakeName,
    ModelName,
    TagName,
    StoreName,
    VehiclePlate,
    UserEmail,
}

impl NaturalKey {
    fn table(&self) -> &'static str {
        match self {
            NaturalKey::CategoryName => "categories",
            NaturalKey::MakeName => "makes",
            NaturalKey::ModelName => "models",
            NaturalKey::TagName => "tags",
            NaturalKey::StoreName => "stores",
            NaturalKey::VehiclePlate => "vehicles",
            NaturalKey::UserEmail => "users",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            NaturalKey::VehiclePlate => "plate",
            NaturalKey::UserEmail => "email",
            _ => "name",
        }
    }

    /// Entity label used in conflict messages.
    pub fn entity(&self) -> &'static str {
        match self {
            NaturalKey::CategoryName => "Category",
            NaturalKey::MakeName => "Make",
            NaturalKey::ModelName => "Model",
            NaturalKey::TagName => "Tag",
            NaturalKey::StoreName => "Store",
            NaturalKey::VehiclePlate => "Vehicle",
            NaturalKey::UserEmail => "User",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("{entity} with {field} {value:?} already exists")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Checks natural-key uniqueness ahead of inserts and renames.
pub struct DuplicateGuard;

impl DuplicateGuard {
    /// Fail with [`GuardError::Duplicate`] if another row of the same type
    /// already holds `value` (case-sensitive).
    ///
    /// Pass `exclude_id` on updates so the row being renamed does not
    /// collide with itself. The guard only reads; the caller performs the
    /// write after the check passes.
    pub async fn check_unique(
        pool: &PgPool,
        key: NaturalKey,
        value: &str,
        exclude_id: Option<DbId>,
    ) -> Result<(), GuardError> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE {column} = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
            table = key.table(),
            column = key.column(),
        );
        let taken: bool = sqlx::query_scalar(&query)
            .bind(value)
            .bind(exclude_id)
            .fetch_one(pool)
            .await?;

        if taken {
            return Err(GuardError::Duplicate {
                entity: key.entity(),
                field: key.column(),
                value: value.to_string(),
            });
        }
        Ok(())
    }
}
