//! Factory for creating experience transactions in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating experience transaction rows.
pub struct ExperienceTransactionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    quest_id: i32,
    experience: i32,
}

impl<'a> ExperienceTransactionFactory<'a> {
    /// Creates a new factory for the given user and quest with a default
    /// experience amount of 50.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, quest_id: i32) -> Self {
        Self {
            db,
            user_id,
            quest_id,
            experience: 50,
        }
    }

    /// Sets the experience amount recorded on the transaction.
    pub fn experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }

    /// Builds and inserts the transaction into the database.
    ///
    /// # Returns
    /// - `Ok(entity::experience_transaction::Model)` - Created transaction
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::experience_transaction::Model, DbErr> {
        let now = Utc::now();
        entity::experience_transaction::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            quest_id: ActiveValue::Set(self.quest_id),
            experience: ActiveValue::Set(self.experience),
            datetime_created: ActiveValue::Set(now),
            datetime_edited: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
