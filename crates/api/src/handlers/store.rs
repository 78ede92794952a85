//! Handlers for the `/store` resource.
//!
//! Stores are the one resource franchisees own. Creation assigns ownership
//! (a franchisee always owns the store they create; an admin may name any
//! franchisee as owner); update and delete run the ownership predicate from
//! `renteria_core::roles`.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use renteria_core::error::CoreError;
use renteria_core::roles::{self, Role};
use renteria_core::types::DbId;

use renteria_db::models::store::{CreateStore, Store, UpdateStore};
use renteria_db::models::vehicle::Vehicle;
use renteria_db::repositories::{DuplicateGuard, NaturalKey, StoreRepo, UserRepo, VehicleRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, OptionalUser};
use crate::state::AppState;

/// Detail view for a single store: the row, its parked vehicles, and
/// whether the viewer may edit it.
#[derive(Debug, Serialize)]
pub struct StoreDetail {
    #[serde(flatten)]
    pub store: Store,
    pub vehicles: Vec<Vehicle>,
    pub is_owner: bool,
}

/// GET /store/all
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Store>>> {
    let stores = StoreRepo::list(&state.pool).await?;
    Ok(Json(stores))
}

/// GET /store/{id}
pub async fn get_by_id(
    viewer: OptionalUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StoreDetail>> {
    let store = StoreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Store", id }))?;

    let vehicles = VehicleRepo::list_by_store(&state.pool, id).await?;

    let is_owner = match &viewer.0 {
        Some(user) => roles::can_manage_owned(Some(user.role), user.user_id, store.owner_id),
        None => false,
    };

    Ok(Json(StoreDetail {
        store,
        vehicles,
        is_owner,
    }))
}

/// POST /store/
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateStore>,
) -> AppResult<(StatusCode, Json<Store>)> {
    input.validate()?;

    let owner_id = resolve_owner(&state, &auth, input.owner_id).await?;

    DuplicateGuard::check_unique(&state.pool, NaturalKey::StoreName, &input.name, None).await?;

    let store =
        StoreRepo::create(&state.pool, &input.name, input.address.as_deref(), owner_id).await?;

    tracing::info!(store_id = store.id, owner_id, user_id = auth.user_id, "Store created");

    Ok((StatusCode::CREATED, Json(store)))
}

/// POST /store/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStore>,
) -> AppResult<Json<Store>> {
    input.validate()?;

    let store = StoreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Store", id }))?;

    if !roles::can_manage_owned(Some(auth.role), auth.user_id, store.owner_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner or an admin may edit a store".into(),
        )));
    }

    if let Some(name) = &input.name {
        DuplicateGuard::check_unique(&state.pool, NaturalKey::StoreName, name, Some(id)).await?;
    }

    let store = StoreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Store", id }))?;

    tracing::info!(store_id = id, user_id = auth.user_id, "Store updated");

    Ok(Json(store))
}

/// DELETE /store/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let store = StoreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Store", id }))?;

    if !roles::can_manage_owned(Some(auth.role), auth.user_id, store.owner_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner or an admin may delete a store".into(),
        )));
    }

    StoreRepo::delete(&state.pool, id).await?;

    tracing::info!(store_id = id, user_id = auth.user_id, "Store deleted");

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, "/store/all")]))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decide who owns a store being created.
///
/// Franchisees own what they create; a supplied `owner_id` is rejected
/// unless it names themselves. Admins must name an owner, and the owner
/// must hold the franchisee role -- the schema does not enforce that, the
/// creation site does.
async fn resolve_owner(
    state: &AppState,
    auth: &AuthUser,
    requested: Option<DbId>,
) -> AppResult<DbId> {
    match auth.role {
        Role::Franchisee => match requested {
            None => Ok(auth.user_id),
            Some(id) if id == auth.user_id => Ok(auth.user_id),
            Some(_) => Err(AppError::Core(CoreError::Forbidden(
                "A franchisee may only create stores they own".into(),
            ))),
        },
        Role::Admin => {
            let owner_id = requested.ok_or_else(|| {
                AppError::Core(CoreError::Validation(
                    "owner_id is required when an admin creates a store".into(),
                ))
            })?;
            let owner = UserRepo::find_by_id(&state.pool, owner_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "User",
                    id: owner_id,
                }))?;
            if Role::parse(&owner.role) != Some(Role::Franchisee) {
                return Err(AppError::Core(CoreError::Validation(
                    "A store owner must be a franchisee".into(),
                )));
            }
            Ok(owner_id)
        }
        Role::Client => Err(AppError::Core(CoreError::Forbidden(
            "Clients may not create stores".into(),
        ))),
    }
}
