use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(pk_auto(Menu::Id))
                    .col(big_integer(Menu::ServerId))
                    .col(date(Menu::StartDate))
                    .col(timestamp_with_time_zone(Menu::DatetimeCreated))
                    .col(timestamp_with_time_zone(Menu::DatetimeEdited))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Menu {
    Table,
    Id,
    ServerId,
    StartDate,
    DatetimeCreated,
    DatetimeEdited,
}
