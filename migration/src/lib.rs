pub use sea_orm_migration::prelude::*;

mod m20250715_000001_create_user_table;
mod m20250715_000002_create_quest_table;
mod m20250715_000003_create_user_quest_table;
mod m20250715_000004_create_experience_transaction_table;
mod m20250722_000005_create_menu_table;
mod m20250722_000006_create_menu_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250715_000001_create_user_table::Migration),
            Box::new(m20250715_000002_create_quest_table::Migration),
            Box::new(m20250715_000003_create_user_quest_table::Migration),
            Box::new(m20250715_000004_create_experience_transaction_table::Migration),
            Box::new(m20250722_000005_create_menu_table::Migration),
            Box::new(m20250722_000006_create_menu_item_table::Migration),
        ]
    }
}
