//! Factory for creating quest acceptance records in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating user-quest acceptance rows.
///
/// Rows default to accepted-but-not-completed; call `completed()` to create
/// a row that already carries a completion timestamp.
pub struct UserQuestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    quest_id: i32,
    completed: bool,
}

impl<'a> UserQuestFactory<'a> {
    /// Creates a new UserQuestFactory linking the given user and quest.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, quest_id: i32) -> Self {
        Self {
            db,
            user_id,
            quest_id,
            completed: false,
        }
    }

    /// Marks the row as already completed.
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Builds and inserts the user-quest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_quest::Model)` - Created acceptance row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_quest::Model, DbErr> {
        let now = Utc::now();
        entity::user_quest::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            quest_id: ActiveValue::Set(self.quest_id),
            date_completed: ActiveValue::Set(self.completed.then_some(now)),
            datetime_created: ActiveValue::Set(now),
            datetime_edited: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an accepted (uncompleted) quest row for the given user and quest.
pub async fn create_accepted_quest(
    db: &DatabaseConnection,
    user_id: i32,
    quest_id: i32,
) -> Result<entity::user_quest::Model, DbErr> {
    UserQuestFactory::new(db, user_id, quest_id).build().await
}
