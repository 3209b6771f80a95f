//! Immutable record of one experience payout.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experience_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub quest_id: i32,
    /// Experience amount at time of award, copied from the quest. Later
    /// changes to the quest's reward do not touch existing transactions.
    pub experience: i32,
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
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::quest::Entity",
        from = "Column::QuestId",
        to = "super::quest::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
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
