//! User registration and lookup.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    data::{query::QueryArgs, repository::Repository},
    error::AppError,
};
use entity::prelude::User;
use entity::user;

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_by_id(&self, user_id: i32) -> Result<Option<user::Model>, AppError> {
        let repo = Repository::<User>::new(self.db);
        Ok(repo.get_by_id(user_id).await?)
    }

    /// Retrieves a user by their Discord id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user registered with that Discord id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_by_discord_id(
        &self,
        discord_id: i64,
    ) -> Result<Option<user::Model>, AppError> {
        let repo = Repository::<User>::new(self.db);
        let args = QueryArgs::<User>::builder()
            .filter_by(user::Column::DiscordId, discord_id)
            .build()?;
        Ok(repo.get_first(args).await?)
    }

    /// Registers a new user for the given Discord id.
    ///
    /// Callers are expected to have checked for an existing registration
    /// first; the unique constraint on the Discord id is the backstop.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored user
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_user(&self, discord_id: i64) -> Result<user::Model, AppError> {
        let repo = Repository::<User>::new(self.db);
        let now = Utc::now();
        let user = repo
            .add(user::ActiveModel {
                discord_id: ActiveValue::Set(discord_id),
                datetime_created: ActiveValue::Set(now),
                datetime_edited: ActiveValue::Set(now),
                ..Default::default()
            })
            .await?;
        Ok(user)
    }
}
