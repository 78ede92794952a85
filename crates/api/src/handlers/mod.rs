//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the repositories in `renteria_db`, run the role
//! policy from `renteria_core::roles`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod category;
pub mod make;
pub mod model;
pub mod nav;
pub mod store;
pub mod tag;
pub mod tag_assignments;
pub mod user;
pub mod vehicle;
