//! Registered Discord user.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord-side user id.
    #[sea_orm(unique)]
    pub discord_id: i64,
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
