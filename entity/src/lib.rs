//! SeaORM entity models for the questboard schema.
//!
//! Every table carries a surrogate `id` primary key plus `datetime_created`
//! and `datetime_edited` audit columns. Write paths are responsible for
//! stamping the audit columns; repositories and factories set them
//! explicitly when inserting or updating rows.

pub mod prelude;

pub mod day_of_week;
pub mod experience_transaction;
pub mod menu;
pub mod menu_item;
pub mod quest;
pub mod user;
pub mod user_quest;
