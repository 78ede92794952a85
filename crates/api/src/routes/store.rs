//! Route definitions for the `/store` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::store;
use crate::state::AppState;

/// ```text
/// POST   /      -> create (franchisee/admin)
/// GET    /all   -> list
/// GET    /{id}  -> get_by_id
/// POST   /{id}  -> update (owner/admin)
/// DELETE /{id}  -> delete (owner/admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(store::create))
        .route("/all", get(store::list))
        .route(
            "/{id}",
            get(store::get_by_id)
                .post(store::update)
                .delete(store::delete),
        )
}
