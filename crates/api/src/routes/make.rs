//! Route definitions for the `/make` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::make;
use crate::state::AppState;

/// ```text
/// POST   /      -> create (admin)
/// GET    /all   -> list (operator)
/// GET    /{id}  -> get_by_id (operator)
/// POST   /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(make::create))
        .route("/all", get(make::list))
        .route(
            "/{id}",
            get(make::get_by_id).post(make::update).delete(make::delete),
        )
}
