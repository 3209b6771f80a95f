//! Factory for creating weekly menus in tests.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating menu rows.
///
/// Defaults:
/// - server_id: auto-incremented
/// - start_date: today
pub struct MenuFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i64,
    start_date: NaiveDate,
}

impl<'a> MenuFactory<'a> {
    /// Creates a new MenuFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            server_id: next_id(),
            start_date: Utc::now().date_naive(),
        }
    }

    /// Sets the Discord server id.
    pub fn server_id(mut self, server_id: i64) -> Self {
        self.server_id = server_id;
        self
    }

    /// Sets the start date of the menu's week.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Builds and inserts the menu entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::menu::Model)` - Created menu entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu::Model, DbErr> {
        let now = Utc::now();
        entity::menu::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            start_date: ActiveValue::Set(self.start_date),
            datetime_created: ActiveValue::Set(now),
            datetime_edited: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
