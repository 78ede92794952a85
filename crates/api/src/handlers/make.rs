//! Handlers for the `/make` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use renteria_core::error::CoreError;
use renteria_core::types::DbId;

use renteria_db::models::make::{CreateMake, Make, UpdateMake};
use renteria_db::repositories::{DuplicateGuard, MakeRepo, NaturalKey};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireOperator};
use crate::state::AppState;

/// GET /make/all
pub async fn list(
    RequireOperator(_op): RequireOperator,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Make>>> {
    let makes = MakeRepo::list(&state.pool).await?;
    Ok(Json(makes))
}

/// GET /make/{id}
pub async fn get_by_id(
    RequireOperator(_op): RequireOperator,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Make>> {
    let make = MakeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Make", id }))?;
    Ok(Json(make))
}

/// POST /make/
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMake>,
) -> AppResult<(StatusCode, Json<Make>)> {
    input.validate()?;
    DuplicateGuard::check_unique(&state.pool, NaturalKey::MakeName, &input.name, None).await?;

    let make = MakeRepo::create(&state.pool, &input).await?;

    tracing::info!(make_id = make.id, user_id = admin.user_id, "Make created");

    Ok((StatusCode::CREATED, Json(make)))
}

/// POST /make/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMake>,
) -> AppResult<Json<Make>> {
    input.validate()?;
    if let Some(name) = &input.name {
        DuplicateGuard::check_unique(&state.pool, NaturalKey::MakeName, name, Some(id)).await?;
    }

    let make = MakeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Make", id }))?;

    tracing::info!(make_id = id, user_id = admin.user_id, "Make updated");

    Ok(Json(make))
}

/// DELETE /make/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MakeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Make", id }));
    }

    tracing::info!(make_id = id, user_id = admin.user_id, "Make deleted");

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, "/make/all")]))
}
