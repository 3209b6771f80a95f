//! A named task a user can take part in, worth a fixed experience reward.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Quest name; unique by case-insensitive comparison as a business rule.
    pub name: String,
    /// Experience awarded on each completion.
    pub experience: i32,
    /// Number of times a single user may complete this quest.
    /// `None` means the quest can be completed an unlimited number of times.
    pub max_completion_count: Option<i32>,
    pub datetime_created: DateTimeUtc,
    pub datetime_edited: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_quest::Entity")]
    UserQuest,
    #[sea_orm(has_many = "super::experience_transaction::Entity")]
    ExperienceTransaction,
}

impl Related<super::user_quest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserQuest.def()
    }
}

impl Related<super::experience_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
