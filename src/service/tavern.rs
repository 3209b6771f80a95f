//! Tavern menu curation.

use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, IntoActiveModel};

use crate::{
    data::{query::QueryArgs, repository::Repository},
    error::{tavern::TavernError, AppError},
    model::tavern::WeeklyMenu,
};
use entity::day_of_week::DayOfWeek;
use entity::prelude::{Menu, MenuItem};
use entity::{menu, menu_item};

/// Service managing a server's weekly food menus.
pub struct TavernService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TavernService<'a> {
    /// Creates a new TavernService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the menu whose week window contains today for the given
    /// server, with its items loaded.
    ///
    /// A menu covers the seven days starting at its `start_date`. When
    /// several windows overlap the most recent start date wins; normally at
    /// most one menu exists per server per week.
    ///
    /// # Returns
    /// - `Ok(Some(WeeklyMenu))` - This week's menu with items
    /// - `Ok(None)` - No menu window contains today
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_this_weeks_menu(&self, server_id: i64) -> Result<Option<WeeklyMenu>, AppError> {
        let today = Utc::now().date_naive();
        let menu_repo = Repository::<Menu>::new(self.db);
        let args = QueryArgs::<Menu>::builder()
            .filter_by(menu::Column::ServerId, server_id)
            .filter(menu::Column::StartDate.between(today - Duration::days(7), today))
            .order_by_desc(menu::Column::StartDate)
            .build()?;

        let Some(menu) = menu_repo.get_first(args).await? else {
            return Ok(None);
        };

        let items = self.load_items(&menu).await?;
        Ok(Some(WeeklyMenu::new(menu, items)))
    }

    /// Creates a new empty menu for the server, starting today.
    ///
    /// Duplicate prevention is the caller's concern; this layer enforces no
    /// per-week uniqueness.
    pub async fn create_menu_for_week(&self, server_id: i64) -> Result<WeeklyMenu, AppError> {
        let repo = Repository::<Menu>::new(self.db);
        let now = Utc::now();
        let menu = repo
            .add(menu::ActiveModel {
                server_id: ActiveValue::Set(server_id),
                start_date: ActiveValue::Set(now.date_naive()),
                datetime_created: ActiveValue::Set(now),
                datetime_edited: ActiveValue::Set(now),
                ..Default::default()
            })
            .await?;
        Ok(WeeklyMenu::new(menu, Vec::new()))
    }

    /// Adds a food item to the given menu on the given day.
    pub async fn insert_menu_item(
        &self,
        menu: &menu::Model,
        item_name: &str,
        day_of_week: DayOfWeek,
    ) -> Result<menu_item::Model, AppError> {
        let repo = Repository::<MenuItem>::new(self.db);
        let now = Utc::now();
        let item = repo
            .add(menu_item::ActiveModel {
                menu_id: ActiveValue::Set(menu.id),
                food: ActiveValue::Set(item_name.to_string()),
                day_of_week: ActiveValue::Set(day_of_week),
                datetime_created: ActiveValue::Set(now),
                datetime_edited: ActiveValue::Set(now),
                ..Default::default()
            })
            .await?;
        Ok(item)
    }

    /// Deletes the first item on the menu whose food name matches exactly
    /// (case-sensitive), optionally restricted to one day.
    ///
    /// # Returns
    /// - `Ok(())` - A matching item was deleted
    /// - `Err(AppError::TavernErr(NoMenuItemFound))` - No item matched; the
    ///   error message embeds the searched name
    pub async fn delete_menu_item(
        &self,
        menu: &WeeklyMenu,
        item_name: &str,
        day_of_week: Option<DayOfWeek>,
    ) -> Result<(), AppError> {
        let items: Vec<&menu_item::Model> = match day_of_week {
            Some(day) => menu
                .items
                .iter()
                .filter(|item| item.day_of_week == day)
                .collect(),
            None => menu.items.iter().collect(),
        };

        for item in items {
            if item.food == item_name {
                let repo = Repository::<MenuItem>::new(self.db);
                repo.delete(item.clone().into_active_model()).await?;
                return Ok(());
            }
        }

        Err(TavernError::NoMenuItemFound {
            name: item_name.to_string(),
        }
        .into())
    }

    async fn load_items(&self, menu: &menu::Model) -> Result<Vec<menu_item::Model>, AppError> {
        let repo = Repository::<MenuItem>::new(self.db);
        let args = QueryArgs::<MenuItem>::builder()
            .filter_by(menu_item::Column::MenuId, menu.id)
            .order_by_asc(menu_item::Column::Id)
            .build()?;
        Ok(repo.get_all(args).await?)
    }
}
