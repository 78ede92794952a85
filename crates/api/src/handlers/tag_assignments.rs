//! Handlers for the tag assign/unassign views on categories and models.
//!
//! `GET /category/{id}/tags` and `GET /model/{id}/tags` render the three-way
//! partition (assigned, available, inherited) plus the column-width hint.
//! `POST` to the same path takes `{ "available": [...], "assigned": [...] }`:
//! ids picked from the available column are added, ids picked from the
//! assigned column are removed. Adds run before removes, mirroring the form
//! layout. A model's view also carries its category's tags read-only.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use renteria_core::error::CoreError;
use renteria_core::tags::{partition, TagPartition, TagRef};
use renteria_core::types::DbId;

use renteria_db::models::tag::{Tag, TagSelection, TagTarget};
use renteria_db::repositories::{CategoryRepo, ModelRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// The tag-assignment view for one target.
#[derive(Debug, Serialize)]
pub struct TagView {
    /// The target's display name (category or model name).
    pub name: String,
    #[serde(flatten)]
    pub partition: TagPartition,
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// GET /category/{id}/tags
pub async fn category_tags(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TagView>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let view = build_view(&state, TagTarget::Category, id, category.name, Vec::new()).await?;
    Ok(Json(view))
}

/// POST /category/{id}/tags
pub async fn update_category_tags(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(selection): Json<TagSelection>,
) -> AppResult<Json<TagView>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    apply_selection(&state, TagTarget::Category, id, &selection, admin.user_id).await?;

    let view = build_view(&state, TagTarget::Category, id, category.name, Vec::new()).await?;
    Ok(Json(view))
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// GET /model/{id}/tags
///
/// Includes the parent category's tags as the read-only `inherited` set.
pub async fn model_tags(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TagView>> {
    let model = ModelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Model", id }))?;

    let inherited = TagRepo::assigned(&state.pool, TagTarget::Category, model.category_id).await?;

    let view = build_view(&state, TagTarget::Model, id, model.name, inherited).await?;
    Ok(Json(view))
}

/// POST /model/{id}/tags
pub async fn update_model_tags(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(selection): Json<TagSelection>,
) -> AppResult<Json<TagView>> {
    let model = ModelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Model", id }))?;

    apply_selection(&state, TagTarget::Model, id, &selection, admin.user_id).await?;

    let inherited = TagRepo::assigned(&state.pool, TagTarget::Category, model.category_id).await?;

    let view = build_view(&state, TagTarget::Model, id, model.name, inherited).await?;
    Ok(Json(view))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the requested adds and removes against one target.
async fn apply_selection(
    state: &AppState,
    target: TagTarget,
    target_id: DbId,
    selection: &TagSelection,
    user_id: DbId,
) -> AppResult<()> {
    if !selection.available.is_empty() {
        TagRepo::add_tags(&state.pool, target, target_id, &selection.available).await?;
        tracing::info!(
            target = target.entity(),
            target_id,
            count = selection.available.len(),
            user_id,
            "Tags added",
        );
    }
    if !selection.assigned.is_empty() {
        TagRepo::remove_tags(&state.pool, target, target_id, &selection.assigned).await?;
        tracing::info!(
            target = target.entity(),
            target_id,
            count = selection.assigned.len(),
            user_id,
            "Tags removed",
        );
    }
    Ok(())
}

/// Load the full tag list and the target's assignments, then partition.
async fn build_view(
    state: &AppState,
    target: TagTarget,
    target_id: DbId,
    name: String,
    inherited: Vec<Tag>,
) -> AppResult<TagView> {
    let all = TagRepo::list_all(&state.pool).await?;
    let assigned_ids: HashSet<DbId> = TagRepo::assigned(&state.pool, target, target_id)
        .await?
        .into_iter()
        .map(|tag| tag.id)
        .collect();

    let parts = partition(
        all.into_iter().map(tag_ref).collect(),
        &assigned_ids,
        inherited.into_iter().map(tag_ref).collect(),
    );

    Ok(TagView {
        name,
        partition: parts,
    })
}

fn tag_ref(tag: Tag) -> TagRef {
    TagRef {
        id: tag.id,
        name: tag.name,
    }
}
