//! Questboard Test Utils
//!
//! Shared testing utilities for building integration and unit tests for the
//! questboard application. This crate offers a builder pattern for creating
//! test contexts with in-memory SQLite databases, plus per-entity factories
//! for seeding rows with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::{Quest, User};
//!
//! #[tokio::test]
//! async fn test_quest_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .with_table(Quest)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
