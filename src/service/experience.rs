//! Experience awards and totals.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection};

use crate::{
    data::{query::QueryArgs, repository::Repository},
    error::AppError,
};
use entity::experience_transaction;
use entity::prelude::ExperienceTransaction;
use entity::{quest, user};

/// Service recording experience payouts.
pub struct ExperienceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExperienceService<'a> {
    /// Creates a new ExperienceService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one experience payout for a completed quest.
    ///
    /// The experience amount is copied from the quest's current reward so
    /// the transaction stays immutable even if the quest's reward later
    /// changes.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored transaction
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn earn_xp_for_quest(
        &self,
        user: &user::Model,
        quest: &quest::Model,
    ) -> Result<experience_transaction::Model, AppError> {
        let repo = Repository::<ExperienceTransaction>::new(self.db);
        let now = Utc::now();
        let transaction = repo
            .add(experience_transaction::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                quest_id: ActiveValue::Set(quest.id),
                experience: ActiveValue::Set(quest.experience),
                datetime_created: ActiveValue::Set(now),
                datetime_edited: ActiveValue::Set(now),
                ..Default::default()
            })
            .await?;
        Ok(transaction)
    }

    /// Sums all experience the user has earned.
    ///
    /// Computed as an aggregate over the transaction projection; a user
    /// with no transactions totals zero.
    pub async fn get_total_xp_for_user(&self, user: &user::Model) -> Result<i64, AppError> {
        let repo = Repository::<ExperienceTransaction>::new(self.db);
        let args = QueryArgs::<ExperienceTransaction>::builder()
            .filter_by(experience_transaction::Column::UserId, user.id)
            .build()?;
        let total: Option<Option<i64>> = repo
            .get_first_with_entities(vec![experience_transaction::Column::Experience.sum()], args)
            .await?;
        Ok(total.flatten().unwrap_or(0))
    }
}
