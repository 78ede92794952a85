//! Explicit route registry.
//!
//! One router per resource, assembled here. Route hierarchy:
//!
//! ```text
//! /health                      service + database health
//! /nav                         role-scoped navigation
//!
//! /category/                   create (POST, admin)
//! /category/all                list
//! /category/{id}               view, update (POST, admin), delete (admin)
//! /category/{id}/tags          tag assignment view + update (admin)
//!
//! /make, /model, /tag, /store, /vehicle   analogous CRUD trees
//! /model/{id}/tags             tag assignment view + update (admin)
//!
//! /user/login                  login (public)
//! /user/refresh                token refresh (public)
//! /user/logout                 revoke sessions (requires auth)
//! /user/client                 register as client (public)
//! /user/franchisee             register as franchisee (public)
//! /user/profile                own record (requires auth)
//! /user/all, /user/{id}        administration (admin)
//! ```

pub mod category;
pub mod health;
pub mod make;
pub mod model;
pub mod store;
pub mod tag;
pub mod user;
pub mod vehicle;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree (everything except `/health`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/nav", get(handlers::nav::nav))
        // Collection create endpoints carry a trailing slash in the spec
        // (`POST /category/`, ...). Under axum 0.8 a nested `/` child answers
        // at the bare prefix, so the trailing-slash form is registered here
        // explicitly to match the documented routes.
        .route("/category/", post(handlers::category::create))
        .route("/make/", post(handlers::make::create))
        .route("/model/", post(handlers::model::create))
        .route("/store/", post(handlers::store::create))
        .route("/tag/", post(handlers::tag::create))
        .route("/vehicle/", post(handlers::vehicle::create))
        .nest("/category", category::router())
        .nest("/make", make::router())
        .nest("/model", model::router())
        .nest("/store", store::router())
        .nest("/tag", tag::router())
        .nest("/user", user::router())
        .nest("/vehicle", vehicle::router())
}
