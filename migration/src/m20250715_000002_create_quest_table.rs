use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quest::Table)
                    .if_not_exists()
                    .col(pk_auto(Quest::Id))
                    .col(string(Quest::Name))
                    .col(integer(Quest::Experience))
                    .col(integer_null(Quest::MaxCompletionCount))
                    .col(timestamp_with_time_zone(Quest::DatetimeCreated))
                    .col(timestamp_with_time_zone(Quest::DatetimeEdited))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quest {
    Table,
    Id,
    Name,
    Experience,
    MaxCompletionCount,
    DatetimeCreated,
    DatetimeEdited,
}
