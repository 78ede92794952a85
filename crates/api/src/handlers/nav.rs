//! The role-scoped navigation endpoint.

use axum::Json;

use renteria_core::nav::{nav_for, NavLink};

use crate::middleware::auth::OptionalUser;

/// GET /nav
///
/// The ordered navigation sections for the current viewer, straight from
/// the role policy table. Anonymous viewers get the public set.
pub async fn nav(viewer: OptionalUser) -> Json<Vec<NavLink>> {
    Json(nav_for(viewer.role()))
}
