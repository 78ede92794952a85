//! Route definitions for the `/category` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{category, tag_assignments};
use crate::state::AppState;

/// ```text
/// POST   /            -> create (admin)
/// GET    /all         -> list
/// GET    /{id}        -> get_by_id
/// POST   /{id}        -> update (admin)
/// DELETE /{id}        -> delete (admin)
/// GET    /{id}/tags   -> tag assignment view (admin)
/// POST   /{id}/tags   -> apply tag selection (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(category::create))
        .route("/all", get(category::list))
        .route(
            "/{id}",
            get(category::get_by_id)
                .post(category::update)
                .delete(category::delete),
        )
        .route(
            "/{id}/tags",
            get(tag_assignments::category_tags).post(tag_assignments::update_category_tags),
        )
}
