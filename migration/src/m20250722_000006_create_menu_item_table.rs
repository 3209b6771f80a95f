use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250722_000005_create_menu_table::Menu;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer(MenuItem::MenuId))
                    .col(string(MenuItem::Food))
                    .col(integer(MenuItem::DayOfWeek))
                    .col(timestamp_with_time_zone(MenuItem::DatetimeCreated))
                    .col(timestamp_with_time_zone(MenuItem::DatetimeEdited))
                    .foreign_key(
                        ForeignKey::create()
                            .from(MenuItem::Table, MenuItem::MenuId)
                            .to(Menu::Table, Menu::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    MenuId,
    Food,
    DayOfWeek,
    DatetimeCreated,
    DatetimeEdited,
}
