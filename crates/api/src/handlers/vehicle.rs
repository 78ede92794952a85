//! Handlers for the `/vehicle` resource.
//!
//! Vehicles belong to the back office: only operators see them. Admins
//! manage the whole fleet; a franchisee manages only vehicles parked at
//! stores they own, and every vehicle they create must land in one of
//! their own stores.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use renteria_core::error::CoreError;
use renteria_core::roles::{self, Role};
use renteria_core::types::DbId;
use renteria_core::vehicles::{normalize_plate, validate_year};

use renteria_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use renteria_db::repositories::{DuplicateGuard, NaturalKey, StoreRepo, VehicleRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOperator;
use crate::state::AppState;

/// Detail view for a single vehicle.
#[derive(Debug, Serialize)]
pub struct VehicleDetail {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub is_owner: bool,
}

/// GET /vehicle/all
///
/// Admins see the whole fleet; franchisees see the vehicles parked at
/// their stores.
pub async fn list(
    RequireOperator(op): RequireOperator,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = match op.role {
        Role::Admin => VehicleRepo::list(&state.pool).await?,
        _ => VehicleRepo::list_by_owner(&state.pool, op.user_id).await?,
    };
    Ok(Json(vehicles))
}

/// GET /vehicle/{id}
pub async fn get_by_id(
    RequireOperator(op): RequireOperator,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VehicleDetail>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;

    let is_owner = can_manage_vehicle(&state, &op, &vehicle).await?;

    Ok(Json(VehicleDetail { vehicle, is_owner }))
}

/// POST /vehicle/
pub async fn create(
    RequireOperator(op): RequireOperator,
    State(state): State<AppState>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let plate = normalize_plate(&input.plate).map_err(AppError::Core)?;
    validate_year(input.year).map_err(AppError::Core)?;

    // A franchisee must park the new vehicle at one of their own stores.
    if op.role == Role::Franchisee {
        let store_id = input.store_id.ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "store_id is required when a franchisee registers a vehicle".into(),
            ))
        })?;
        ensure_owns_store(&state, &op, store_id).await?;
    }

    DuplicateGuard::check_unique(&state.pool, NaturalKey::VehiclePlate, &plate, None).await?;

    let vehicle = VehicleRepo::create(
        &state.pool,
        &plate,
        input.model_id,
        input.year,
        input.store_id,
    )
    .await?;

    tracing::info!(vehicle_id = vehicle.id, plate = %vehicle.plate, user_id = op.user_id, "Vehicle created");

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// POST /vehicle/{id}
pub async fn update(
    RequireOperator(op): RequireOperator,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;

    if !can_manage_vehicle(&state, &op, &vehicle).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owning franchisee or an admin may edit a vehicle".into(),
        )));
    }

    if let Some(plate) = &input.plate {
        let normalized = normalize_plate(plate).map_err(AppError::Core)?;
        DuplicateGuard::check_unique(&state.pool, NaturalKey::VehiclePlate, &normalized, Some(id))
            .await?;
        input.plate = Some(normalized);
    }
    if let Some(year) = input.year {
        validate_year(year).map_err(AppError::Core)?;
    }
    // Moving the vehicle: a franchisee may only target stores they own.
    if let Some(store_id) = input.store_id {
        if op.role == Role::Franchisee {
            ensure_owns_store(&state, &op, store_id).await?;
        }
    }

    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;

    tracing::info!(vehicle_id = id, user_id = op.user_id, "Vehicle updated");

    Ok(Json(vehicle))
}

/// DELETE /vehicle/{id}
pub async fn delete(
    RequireOperator(op): RequireOperator,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;

    if !can_manage_vehicle(&state, &op, &vehicle).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owning franchisee or an admin may delete a vehicle".into(),
        )));
    }

    VehicleRepo::delete(&state.pool, id).await?;

    tracing::info!(vehicle_id = id, user_id = op.user_id, "Vehicle deleted");

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, "/vehicle/all")]))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether the operator may manage this vehicle.
///
/// Ownership flows through the store: admin always; franchisee when the
/// vehicle sits at a store they own; nobody else. A vehicle without a store
/// is admin-managed only.
async fn can_manage_vehicle(
    state: &AppState,
    op: &AuthUser,
    vehicle: &Vehicle,
) -> AppResult<bool> {
    if op.role == Role::Admin {
        return Ok(true);
    }
    let Some(store_id) = vehicle.store_id else {
        return Ok(false);
    };
    let Some(store) = StoreRepo::find_by_id(&state.pool, store_id).await? else {
        return Ok(false);
    };
    Ok(roles::can_manage_owned(Some(op.role), op.user_id, store.owner_id))
}

/// Fail with 403 unless the operator owns the given store.
async fn ensure_owns_store(state: &AppState, op: &AuthUser, store_id: DbId) -> AppResult<()> {
    let store = StoreRepo::find_by_id(&state.pool, store_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Store",
            id: store_id,
        }))?;
    if !roles::can_manage_owned(Some(op.role), op.user_id, store.owner_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "The store does not belong to you".into(),
        )));
    }
    Ok(())
}
