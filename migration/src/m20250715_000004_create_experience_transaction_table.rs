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
                    .table(ExperienceTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(ExperienceTransaction::Id))
                    .col(integer(ExperienceTransaction::UserId))
                    .col(integer(ExperienceTransaction::QuestId))
                    .col(integer(ExperienceTransaction::Experience))
                    .col(timestamp_with_time_zone(
                        ExperienceTransaction::DatetimeCreated,
                    ))
                    .col(timestamp_with_time_zone(
                        ExperienceTransaction::DatetimeEdited,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExperienceTransaction::Table, ExperienceTransaction::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExperienceTransaction::Table, ExperienceTransaction::QuestId)
                            .to(Quest::Table, Quest::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ExperienceTransaction::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExperienceTransaction {
    Table,
    Id,
    UserId,
    QuestId,
    Experience,
    DatetimeCreated,
    DatetimeEdited,
}
