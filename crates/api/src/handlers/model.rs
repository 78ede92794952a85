//! Handlers for the `/model` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use renteria_core::error::CoreError;
use renteria_core::roles;
use renteria_core::types::DbId;

use renteria_db::models::model::{CreateModel, Model, ModelWithNames, UpdateModel};
use renteria_db::models::tag::{Tag, TagTarget};
use renteria_db::repositories::{DuplicateGuard, ModelRepo, NaturalKey, TagRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Detail view for a single model: the row, its own tags, the tags shown
/// from its category, and whether the viewer may edit it.
#[derive(Debug, Serialize)]
pub struct ModelDetail {
    #[serde(flatten)]
    pub model: Model,
    pub tags: Vec<Tag>,
    /// The parent category's tags, display-only.
    pub category_tags: Vec<Tag>,
    pub is_owner: bool,
}

/// GET /model/all
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ModelWithNames>>> {
    let models = ModelRepo::list_with_names(&state.pool).await?;
    Ok(Json(models))
}

/// GET /model/{id}
pub async fn get_by_id(
    viewer: OptionalUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ModelDetail>> {
    let model = ModelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Model", id }))?;

    let tags = TagRepo::assigned(&state.pool, TagTarget::Model, id).await?;
    let category_tags =
        TagRepo::assigned(&state.pool, TagTarget::Category, model.category_id).await?;

    Ok(Json(ModelDetail {
        model,
        tags,
        category_tags,
        is_owner: roles::is_admin(viewer.role()),
    }))
}

/// POST /model/
///
/// `make_id`/`category_id` must reference existing rows; a bad reference is
/// caught by the foreign keys and answered as 400.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateModel>,
) -> AppResult<(StatusCode, Json<Model>)> {
    input.validate()?;
    DuplicateGuard::check_unique(&state.pool, NaturalKey::ModelName, &input.name, None).await?;

    let model = ModelRepo::create(&state.pool, &input).await?;

    tracing::info!(model_id = model.id, user_id = admin.user_id, "Model created");

    Ok((StatusCode::CREATED, Json(model)))
}

/// POST /model/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateModel>,
) -> AppResult<Json<Model>> {
    input.validate()?;
    if let Some(name) = &input.name {
        DuplicateGuard::check_unique(&state.pool, NaturalKey::ModelName, name, Some(id)).await?;
    }

    let model = ModelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Model", id }))?;

    tracing::info!(model_id = id, user_id = admin.user_id, "Model updated");

    Ok(Json(model))
}

/// DELETE /model/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ModelRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Model", id }));
    }

    tracing::info!(model_id = id, user_id = admin.user_id, "Model deleted");

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, "/model/all")]))
}
