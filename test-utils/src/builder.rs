use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Quest, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Quest)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite syntax. Tables should be added in dependency order
    /// (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for quest operations.
    ///
    /// This convenience method adds the following tables in dependency
    /// order:
    /// - User
    /// - Quest
    /// - UserQuest
    /// - ExperienceTransaction
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_quest_tables(self) -> Self {
        self.with_table(User)
            .with_table(Quest)
            .with_table(UserQuest)
            .with_table(ExperienceTransaction)
    }

    /// Adds all tables required for tavern menu operations.
    ///
    /// This convenience method adds the Menu and MenuItem tables in
    /// dependency order.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_tavern_tables(self) -> Self {
        self.with_table(Menu).with_table(MenuItem)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all
    /// CREATE TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
