//! Handlers for user administration (list, inspect, delete). Admin only.
//!
//! Registration and the self-service profile live in [`super::auth`].

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use renteria_core::error::CoreError;
use renteria_core::types::DbId;

use renteria_db::models::store::Store;
use renteria_db::models::user::UserResponse;
use renteria_db::repositories::{StoreRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Admin detail view of a user: the record plus any stores they own.
#[derive(Debug, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: UserResponse,
    pub stores: Vec<Store>,
}

/// GET /user/all
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /user/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserDetail>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let stores = StoreRepo::list_by_owner(&state.pool, id).await?;

    Ok(Json(UserDetail {
        user: user.into(),
        stores,
    }))
}

/// DELETE /user/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "An admin cannot delete their own account".into(),
        )));
    }

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(deleted_user_id = id, user_id = admin.user_id, "User deleted");

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, "/user/all")]))
}
