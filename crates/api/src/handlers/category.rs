//! Handlers for the `/category` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use renteria_core::error::CoreError;
use renteria_core::roles;
use renteria_core::types::DbId;

use renteria_db::models::category::{Category, CreateCategory, UpdateCategory};
use renteria_db::models::model::Model;
use renteria_db::models::tag::{Tag, TagTarget};
use renteria_db::repositories::{CategoryRepo, DuplicateGuard, ModelRepo, NaturalKey, TagRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Detail view for a single category: the row, its models, its tags, and
/// whether the viewer may edit it.
#[derive(Debug, Serialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    pub models: Vec<Model>,
    pub tags: Vec<Tag>,
    pub is_owner: bool,
}

/// GET /category/all
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /category/{id}
///
/// Public detail view. `is_owner` tells the UI whether to render edit
/// controls; only admins edit categories.
pub async fn get_by_id(
    viewer: OptionalUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CategoryDetail>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let models = ModelRepo::list_by_category(&state.pool, id).await?;
    let tags = TagRepo::assigned(&state.pool, TagTarget::Category, id).await?;

    Ok(Json(CategoryDetail {
        category,
        models,
        tags,
        is_owner: roles::is_admin(viewer.role()),
    }))
}

/// POST /category/
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    input.validate()?;
    DuplicateGuard::check_unique(&state.pool, NaturalKey::CategoryName, &input.name, None).await?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, user_id = admin.user_id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// POST /category/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    input.validate()?;
    if let Some(name) = &input.name {
        DuplicateGuard::check_unique(&state.pool, NaturalKey::CategoryName, name, Some(id)).await?;
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    tracing::info!(category_id = id, user_id = admin.user_id, "Category updated");

    Ok(Json(category))
}

/// DELETE /category/{id}
///
/// Answers 303 See Other pointing back at the collection.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, user_id = admin.user_id, "Category deleted");

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, "/category/all")]))
}
