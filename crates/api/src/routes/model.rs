//! Route definitions for the `/model` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{model, tag_assignments};
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
        .route("/", post(model::create))
        .route("/all", get(model::list))
        .route(
            "/{id}",
            get(model::get_by_id)
                .post(model::update)
                .delete(model::delete),
        )
        .route(
            "/{id}/tags",
            get(tag_assignments::model_tags).post(tag_assignments::update_model_tags),
        )
}
