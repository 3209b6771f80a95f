use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250715_000001_create_user_table::User;
use crate::m20250715_000002_create_quest_table::Quest;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserQuest::Table)
                    .if_not_exists()
                    .col(pk_auto(UserQuest::Id))
                    .col(integer(UserQuest::UserId))
                    .col(integer(UserQuest::QuestId))
                    .col(timestamp_with_time_zone_null(UserQuest::DateCompleted))
                    .col(timestamp_with_time_zone(UserQuest::DatetimeCreated))
                    .col(timestamp_with_time_zone(UserQuest::DatetimeEdited))
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserQuest::Table, UserQuest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserQuest::Table, UserQuest::QuestId)
                            .to(Quest::Table, Quest::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_quest_user_id")
                    .table(UserQuest::Table)
                    .col(UserQuest::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_quest_quest_id")
                    .table(UserQuest::Table)
                    .col(UserQuest::QuestId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserQuest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserQuest {
    Table,
    Id,
    UserId,
    QuestId,
    DateCompleted,
    DatetimeCreated,
    DatetimeEdited,
}
