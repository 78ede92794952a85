//! Tag models, the association target enum, and DTOs.

use renteria_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The kind of entity a tag can be attached to.
///
/// Selects which join table an association operation touches. Categories and
/// models each have their own join table; the pair (tag_id, target_id) is
/// unique within each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTarget {
    Category,
    Model,
}

impl TagTarget {
    /// The association join table for this target kind.
    pub fn join_table(&self) -> &'static str {
        match self {
            TagTarget::Category => "category_tags",
            TagTarget::Model => "model_tags",
        }
    }

    /// The foreign-key column naming the target inside the join table.
    pub fn fk_column(&self) -> &'static str {
        match self {
            TagTarget::Category => "category_id",
            TagTarget::Model => "model_id",
        }
    }

    /// The target's own table, used for existence checks.
    pub fn target_table(&self) -> &'static str {
        match self {
            TagTarget::Category => "categories",
            TagTarget::Model => "models",
        }
    }

    /// Entity label used in error messages.
    pub fn entity(&self) -> &'static str {
        match self {
            TagTarget::Category => "Category",
            TagTarget::Model => "Model",
        }
    }
}

/// DTO for creating a new tag.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTag {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
}

/// DTO for renaming a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTag {
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
}

/// Body for the tag-assignment endpoint: ids picked from the `available`
/// column are added, ids picked from the `assigned` column are removed.
#[derive(Debug, Default, Deserialize)]
pub struct TagSelection {
    #[serde(default)]
    pub available: Vec<DbId>,
    #[serde(default)]
    pub assigned: Vec<DbId>,
}
