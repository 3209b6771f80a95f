//! Factory for creating menu items in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::day_of_week::DayOfWeek;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating menu item rows.
///
/// Defaults:
/// - food: `"Food {id}"` where id is auto-incremented
/// - day_of_week: Monday
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    menu_id: i32,
    food: String,
    day_of_week: DayOfWeek,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory for the given menu.
    pub fn new(db: &'a DatabaseConnection, menu_id: i32) -> Self {
        Self {
            db,
            menu_id,
            food: format!("Food {}", next_id()),
            day_of_week: DayOfWeek::Monday,
        }
    }

    /// Sets the food name.
    pub fn food(mut self, food: impl Into<String>) -> Self {
        self.food = food.into();
        self
    }

    /// Sets the day of the week.
    pub fn day_of_week(mut self, day_of_week: DayOfWeek) -> Self {
        self.day_of_week = day_of_week;
        self
    }

    /// Builds and inserts the menu item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::menu_item::Model)` - Created menu item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        let now = Utc::now();
        entity::menu_item::ActiveModel {
            menu_id: ActiveValue::Set(self.menu_id),
            food: ActiveValue::Set(self.food),
            day_of_week: ActiveValue::Set(self.day_of_week),
            datetime_created: ActiveValue::Set(now),
            datetime_edited: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
