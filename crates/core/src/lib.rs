//! Domain logic for the rental back office.
//!
//! Everything in this crate is pure: no I/O, no database handles. The
//! persistence layer lives in `renteria-db`, the HTTP surface in
//! `renteria-api`.

pub mod error;
pub mod nav;
pub mod roles;
pub mod tags;
pub mod types;
pub mod vehicles;
