//! Domain view models and API DTOs.
//!
//! Entities cross the repository boundary as SeaORM models; this module
//! holds the handful of shapes built on top of them: DTOs serialized by the
//! HTTP API and the loaded weekly-menu view used for display grouping.

pub mod api;
pub mod tavern;
pub mod user;
