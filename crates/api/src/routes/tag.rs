//! Route definitions for the `/tag` resource.
//!
//! Tag-to-target association routes live under `/category/{id}/tags` and
//! `/model/{id}/tags`; this router only covers the tag records themselves.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tag;
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
        .route("/", post(tag::create))
        .route("/all", get(tag::list))
        .route(
            "/{id}",
            get(tag::get_by_id).post(tag::update).delete(tag::delete),
        )
}
