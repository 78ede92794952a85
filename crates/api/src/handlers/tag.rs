//! Handlers for the `/tag` resource (tag CRUD).
//!
//! Association views live in [`super::tag_assignments`].

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use renteria_core::error::CoreError;
use renteria_core::types::DbId;

use renteria_db::models::tag::{CreateTag, Tag, UpdateTag};
use renteria_db::repositories::{DuplicateGuard, NaturalKey, TagRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireOperator};
use crate::state::AppState;

/// GET /tag/all
pub async fn list(
    RequireOperator(_op): RequireOperator,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Tag>>> {
    let tags = TagRepo::list_all(&state.pool).await?;
    Ok(Json(tags))
}

/// GET /tag/{id}
pub async fn get_by_id(
    RequireOperator(_op): RequireOperator,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tag>> {
    let tag = TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tag", id }))?;
    Ok(Json(tag))
}

/// POST /tag/
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    input.validate()?;
    DuplicateGuard::check_unique(&state.pool, NaturalKey::TagName, &input.name, None).await?;

    let tag = TagRepo::create(&state.pool, &input).await?;

    tracing::info!(tag_id = tag.id, user_id = admin.user_id, "Tag created");

    Ok((StatusCode::CREATED, Json(tag)))
}

/// POST /tag/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTag>,
) -> AppResult<Json<Tag>> {
    input.validate()?;
    if let Some(name) = &input.name {
        DuplicateGuard::check_unique(&state.pool, NaturalKey::TagName, name, Some(id)).await?;
    }

    let tag = TagRepo::update(&state.pool, id, input.name.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tag", id }))?;

    tracing::info!(tag_id = id, user_id = admin.user_id, "Tag updated");

    Ok(Json(tag))
}

/// DELETE /tag/{id}
///
/// Removes the tag and, by cascade, all its category/model associations.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TagRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tag", id }));
    }

    tracing::info!(tag_id = id, user_id = admin.user_id, "Tag deleted");

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, "/tag/all")]))
}
