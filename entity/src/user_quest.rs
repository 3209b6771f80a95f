//! Acceptance record linking a user to a quest.
//!
//! A row is created when a user accepts a quest and marked complete by
//! setting `date_completed`. Repeatable quests accumulate one row per
//! accept/complete cycle; at most one row per (user, quest) pair is
//! uncompleted at any time, which the quest service enforces with a count
//! query before inserting.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_quest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: i32,
    #[sea_orm(indexed)]
    pub quest_id: i32,
    /// When the quest was completed; `None` while still in progress.
    pub date_completed: Option<DateTimeUtc>,
    pub datetime_created: DateTimeUtc,
    pub datetime_edited: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::quest::Entity",
        from = "Column::QuestId",
        to = "super::quest::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Quest,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::quest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether this acceptance has been completed.
    pub fn completed(&self) -> bool {
        self.date_completed.is_some()
    }
}

/// SQL predicate matching rows whose completion state equals `completed`.
///
/// Kept next to [`Model::completed`] so the in-memory accessor and the query
/// predicate always derive from the same column.
pub fn completed_condition(completed: bool) -> SimpleExpr {
    if completed {
        Column::DateCompleted.is_not_null()
    } else {
        Column::DateCompleted.is_null()
    }
}
