//! Route definitions for the `/user` resource: authentication, registration,
//! and user administration.

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use crate::handlers::{auth, user};
use crate::state::AppState;

/// ```text
/// POST /login        -> login
/// POST /refresh      -> refresh tokens
/// GET  /logout       -> revoke sessions (requires auth)
/// POST /client       -> register as client
/// POST /franchisee   -> register as franchisee
/// GET  /profile      -> own record (requires auth)
/// GET  /all          -> list users (admin)
/// GET  /{id}         -> user detail (admin)
/// DELETE /{id}       -> delete user (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", get(auth::logout))
        .route("/client", post(auth::register_client))
        .route("/franchisee", post(auth::register_franchisee))
        .route("/profile", get(auth::profile))
        .route("/all", get(user::list))
        .route("/{id}", get(user::get_by_id).delete(user::delete))
}
