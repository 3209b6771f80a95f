//! Quest workflow business logic.
//!
//! Each (user, quest) pair moves through an implicit state machine:
//! not-accepted, accepted, completed — and back to accepted when the quest
//! allows repeat completion. The transitions live here; the controllers only
//! translate errors into chat replies.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    data::{
        query::{case_insensitive_eq, QueryArgs},
        repository::Repository,
    },
    error::{quest::QuestError, AppError},
};
use entity::prelude::{Quest, UserQuest};
use entity::{quest, user, user_quest};

/// Service providing the quest accept/complete workflow.
pub struct QuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestService<'a> {
    /// Creates a new QuestService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up a quest by name, matching the full name case-insensitively.
    async fn get_quest_by_name(&self, quest_name: &str) -> Result<Option<quest::Model>, AppError> {
        let repo = Repository::<Quest>::new(self.db);
        let args = QueryArgs::<Quest>::builder()
            .filter(case_insensitive_eq(quest::Column::Name, quest_name))
            .build()?;
        Ok(repo.get_first(args).await?)
    }

    /// Arguments matching the user's acceptance rows for a quest, filtered
    /// to completed or uncompleted rows.
    fn acceptance_args(
        user: &user::Model,
        quest: &quest::Model,
        completed: bool,
    ) -> Result<QueryArgs<UserQuest>, AppError> {
        Ok(QueryArgs::<UserQuest>::builder()
            .filter_by(user_quest::Column::UserId, user.id)
            .filter_by(user_quest::Column::QuestId, quest.id)
            .filter(user_quest::completed_condition(completed))
            .build()?)
    }

    /// Attempts to find a quest with the provided name and add it to the
    /// user's currently accepted quests.
    ///
    /// The existence check and the insert are separate statements; two
    /// racing accepts for the same pair can both pass the check.
    ///
    /// # Returns
    /// - `Ok(String)` - Success reply interpolated with the quest name
    /// - `Err(AppError::QuestErr(DoesNotExist))` - No quest with that name
    /// - `Err(AppError::QuestErr(AlreadyAccepted))` - The user already has
    ///   an uncompleted acceptance for this quest
    pub async fn accept_quest_if_available(
        &self,
        user: &user::Model,
        quest_name: &str,
    ) -> Result<String, AppError> {
        let quest = self
            .get_quest_by_name(quest_name)
            .await?
            .ok_or_else(|| QuestError::DoesNotExist {
                name: quest_name.to_string(),
            })?;

        let user_quest_repo = Repository::<UserQuest>::new(self.db);
        let accepted = user_quest_repo
            .get_count(Self::acceptance_args(user, &quest, false)?)
            .await?;
        if accepted >= 1 {
            return Err(QuestError::AlreadyAccepted { name: quest.name }.into());
        }

        let now = Utc::now();
        user_quest_repo
            .add(user_quest::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                quest_id: ActiveValue::Set(quest.id),
                datetime_created: ActiveValue::Set(now),
                datetime_edited: ActiveValue::Set(now),
                ..Default::default()
            })
            .await?;

        Ok(format!(
            "You have accepted {quest_name}! Good luck adventurer"
        ))
    }

    /// Attempts to complete the user's accepted quest with the provided
    /// name, stamping the completion time.
    ///
    /// Awarding experience is the caller's responsibility, as a separate
    /// step after this returns.
    ///
    /// # Returns
    /// - `Ok(Model)` - The completed quest
    /// - `Err(AppError::QuestErr(DoesNotExist))` - No quest with that name
    /// - `Err(AppError::QuestErr(NotAccepted))` - No uncompleted acceptance
    /// - `Err(AppError::QuestErr(MaxCompletionReached))` - The user has hit
    ///   the quest's completion cap
    pub async fn complete_quest_if_available(
        &self,
        user: &user::Model,
        quest_name: &str,
    ) -> Result<quest::Model, AppError> {
        let quest = self
            .get_quest_by_name(quest_name)
            .await?
            .ok_or_else(|| QuestError::DoesNotExist {
                name: quest_name.to_string(),
            })?;

        let user_quest_repo = Repository::<UserQuest>::new(self.db);
        let active_user_quest = user_quest_repo
            .get_first(Self::acceptance_args(user, &quest, false)?)
            .await?
            .ok_or_else(|| QuestError::NotAccepted {
                name: quest.name.clone(),
            })?;

        if let Some(max_completions) = quest.max_completion_count.filter(|max| *max > 0) {
            let completed = user_quest_repo
                .get_count(Self::acceptance_args(user, &quest, true)?)
                .await?;
            if completed >= max_completions as u64 {
                return Err(QuestError::MaxCompletionReached { name: quest.name }.into());
            }
        }

        let now = Utc::now();
        let mut active = active_user_quest.into_active_model();
        active.date_completed = ActiveValue::Set(Some(now));
        active.datetime_edited = ActiveValue::Set(now);
        user_quest_repo.update(active).await?;

        Ok(quest)
    }

    /// Returns all quests, for the quest board.
    pub async fn get_all_quests(&self) -> Result<Vec<quest::Model>, AppError> {
        let repo = Repository::<Quest>::new(self.db);
        Ok(repo.get_all(QueryArgs::default()).await?)
    }
}
