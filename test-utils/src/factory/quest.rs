//! Quest factory for creating test quest entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test quests with customizable fields.
///
/// Defaults:
/// - name: `"Quest {id}"` where id is auto-incremented
/// - experience: `50`
/// - max_completion_count: `None` (unlimited completions)
pub struct QuestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    experience: i32,
    max_completion_count: Option<i32>,
}

impl<'a> QuestFactory<'a> {
    /// Creates a new QuestFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Quest {}", id),
            experience: 50,
            max_completion_count: None,
        }
    }

    /// Sets the name of the quest.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the experience reward.
    pub fn experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }

    /// Sets the per-user completion cap.
    pub fn max_completion_count(mut self, count: i32) -> Self {
        self.max_completion_count = Some(count);
        self
    }

    /// Builds and inserts the quest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::quest::Model)` - Created quest entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::quest::Model, DbErr> {
        let now = Utc::now();
        entity::quest::ActiveModel {
            name: ActiveValue::Set(self.name),
            experience: ActiveValue::Set(self.experience),
            max_completion_count: ActiveValue::Set(self.max_completion_count),
            datetime_created: ActiveValue::Set(now),
            datetime_edited: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a quest with default values.
pub async fn create_quest(db: &DatabaseConnection) -> Result<entity::quest::Model, DbErr> {
    QuestFactory::new(db).build().await
}
