//! Repository for the `tags` table and the category/model association
//! tables.
//!
//! The association operations carry the engine semantics: adds are
//! idempotent per tag, removes are all-or-nothing per call, and both verify
//! that the target and every requested tag exist before touching the join
//! table.

use sqlx::PgPool;

use renteria_core::types::DbId;

use crate::models::tag::{CreateTag, Tag, TagTarget};

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, created_at, updated_at";

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("{entity} with id {id} not found")]
    TargetNotFound { entity: &'static str, id: DbId },

    /// One or more requested tag ids do not resolve to existing tags.
    /// Carries the missing ids, sorted ascending. Nothing was applied.
    #[error("Unknown tag ids: {0:?}")]
    UnknownTags(Vec<DbId>),

    /// A removal named a tag that is not associated with the target.
    /// Nothing was removed.
    #[error("Tag {tag_id} is not associated with the target")]
    NotAssociated { tag_id: DbId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides tag CRUD and the category/model tag associations.
pub struct TagRepo;

impl TagRepo {
    // -----------------------------------------------------------------------
    // Tag CRUD
    // -----------------------------------------------------------------------

    /// Insert a new tag, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let query = format!("INSERT INTO tags (name) VALUES ($1) RETURNING {TAG_COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every tag in the system, in presentation order (name, then id).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags ORDER BY name, id");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// Fetch the tags matching `ids`. Missing ids are simply absent from the
    /// result; callers compare counts to detect them.
    pub async fn get_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = ANY($1) ORDER BY name, id");
        sqlx::query_as::<_, Tag>(&query).bind(ids).fetch_all(pool).await
    }

    /// Rename a tag. Returns `None` if no tag with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
    ) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!(
            "UPDATE tags SET name = COALESCE($2, name) WHERE id = $1 RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tag by ID. Cascade deletes all its associations.
    ///
    /// Returns `true` if a tag was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Associations
    // -----------------------------------------------------------------------

    /// The tags directly associated with a target, in presentation order.
    pub async fn assigned(
        pool: &PgPool,
        target: TagTarget,
        target_id: DbId,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.name, t.created_at, t.updated_at \
             FROM {join} jt \
             JOIN tags t ON t.id = jt.tag_id \
             WHERE jt.{fk} = $1 \
             ORDER BY t.name, t.id",
            join = target.join_table(),
            fk = target.fk_column(),
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(target_id)
            .fetch_all(pool)
            .await
    }

    /// Associate tags with a target.
    ///
    /// Every requested id must resolve to an existing tag or the whole call
    /// fails with [`TagError::UnknownTags`]. Tags already associated are
    /// left untouched (re-adding is not an error). Returns the target's
    /// refreshed tag set.
    pub async fn add_tags(
        pool: &PgPool,
        target: TagTarget,
        target_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<Vec<Tag>, TagError> {
        Self::ensure_target_exists(pool, target, target_id).await?;
        Self::ensure_tags_exist(pool, tag_ids).await?;

        let insert = format!(
            "INSERT INTO {join} (tag_id, {fk}) VALUES ($1, $2) \
             ON CONFLICT (tag_id, {fk}) DO NOTHING",
            join = target.join_table(),
            fk = target.fk_column(),
        );
        for &tag_id in tag_ids {
            sqlx::query(&insert)
                .bind(tag_id)
                .bind(target_id)
                .execute(pool)
                .await?;
        }

        Ok(Self::assigned(pool, target, target_id).await?)
    }

    /// Dissociate tags from a target.
    ///
    /// Same existence checks as [`Self::add_tags`]. In addition every
    /// requested tag must currently be associated; the first one that is
    /// not fails the whole call with [`TagError::NotAssociated`] before
    /// anything is removed. Returns the target's refreshed tag set.
    pub async fn remove_tags(
        pool: &PgPool,
        target: TagTarget,
        target_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<Vec<Tag>, TagError> {
        Self::ensure_target_exists(pool, target, target_id).await?;
        Self::ensure_tags_exist(pool, tag_ids).await?;

        let current: Vec<DbId> = Self::assigned(pool, target, target_id)
            .await?
            .into_iter()
            .map(|tag| tag.id)
            .collect();
        for &tag_id in tag_ids {
            if !current.contains(&tag_id) {
                return Err(TagError::NotAssociated { tag_id });
            }
        }

        let delete = format!(
            "DELETE FROM {join} WHERE tag_id = $1 AND {fk} = $2",
            join = target.join_table(),
            fk = target.fk_column(),
        );
        for &tag_id in tag_ids {
            sqlx::query(&delete)
                .bind(tag_id)
                .bind(target_id)
                .execute(pool)
                .await?;
        }

        Ok(Self::assigned(pool, target, target_id).await?)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Fail with [`TagError::TargetNotFound`] if the target row is missing.
    async fn ensure_target_exists(
        pool: &PgPool,
        target: TagTarget,
        target_id: DbId,
    ) -> Result<(), TagError> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)",
            table = target.target_table(),
        );
        let exists: bool = sqlx::query_scalar(&query)
            .bind(target_id)
            .fetch_one(pool)
            .await?;
        if !exists {
            return Err(TagError::TargetNotFound {
                entity: target.entity(),
                id: target_id,
            });
        }
        Ok(())
    }

    /// Fail with [`TagError::UnknownTags`] listing the ids that do not
    /// resolve to existing tags. No partial application. Repeated ids in
    /// the request count once.
    async fn ensure_tags_exist(pool: &PgPool, tag_ids: &[DbId]) -> Result<(), TagError> {
        let found: Vec<DbId> = Self::get_many(pool, tag_ids)
            .await?
            .into_iter()
            .map(|tag| tag.id)
            .collect();
        let mut missing: Vec<DbId> = tag_ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            missing.dedup();
            return Err(TagError::UnknownTags(missing));
        }
        Ok(())
    }
}
