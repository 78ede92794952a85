//! Route definitions for the `/vehicle` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::vehicle;
use crate::state::AppState;

/// ```text
/// POST   /      -> create (operator, ownership-checked)
/// GET    /all   -> list (operator, scoped to owned stores for franchisees)
/// GET    /{id}  -> get_by_id (operator)
/// POST   /{id}  -> update (owner/admin)
/// DELETE /{id}  -> delete (owner/admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(vehicle::create))
        .route("/all", get(vehicle::list))
        .route(
            "/{id}",
            get(vehicle::get_by_id)
                .post(vehicle::update)
                .delete(vehicle::delete),
        )
}
