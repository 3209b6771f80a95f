//! Factories for creating test entities with sensible defaults.
//!
//! Each factory uses a builder pattern: defaults come from an atomic
//! counter so entities never collide, and individual fields can be
//! overridden before calling `build()`.

pub mod experience_transaction;
pub mod helpers;
pub mod menu;
pub mod menu_item;
pub mod quest;
pub mod user;
pub mod user_quest;
