use chrono::{Duration, Utc};
use entity::day_of_week::DayOfWeek;
use test_utils::builder::TestBuilder;
use test_utils::context::TestContext;
use test_utils::factory::menu::MenuFactory;
use test_utils::factory::menu_item::MenuItemFactory;

use crate::error::{tavern::TavernError, AppError};
use crate::service::tavern::TavernService;

async fn tavern_context() -> TestContext {
    TestBuilder::new()
        .with_tavern_tables()
        .build()
        .await
        .unwrap()
}

/// A menu whose window contains today is returned with its items loaded.
#[tokio::test]
async fn finds_this_weeks_menu_with_items() {
    let test = tavern_context().await;
    let db = test.db.as_ref().unwrap();
    let menu = MenuFactory::new(db).server_id(42).build().await.unwrap();
    MenuItemFactory::new(db, menu.id)
        .food("Stew")
        .day_of_week(DayOfWeek::Monday)
        .build()
        .await
        .unwrap();

    let found = TavernService::new(db)
        .get_this_weeks_menu(42)
        .await
        .unwrap()
        .expect("menu should be in this week's window");

    assert_eq!(found.menu.id, menu.id);
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].food, "Stew");
}

/// No menu is returned when no window contains today, or when the menu
/// belongs to another server.
#[tokio::test]
async fn returns_none_outside_the_week_window() {
    let test = tavern_context().await;
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();

    // Expired window on the right server, current window on another server.
    MenuFactory::new(db)
        .server_id(42)
        .start_date(today - Duration::days(10))
        .build()
        .await
        .unwrap();
    MenuFactory::new(db).server_id(7).build().await.unwrap();

    let found = TavernService::new(db).get_this_weeks_menu(42).await.unwrap();

    assert!(found.is_none());
}

/// When two windows overlap today, the most recent start date wins.
#[tokio::test]
async fn newest_menu_wins_when_windows_overlap() {
    let test = tavern_context().await;
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();

    MenuFactory::new(db)
        .server_id(42)
        .start_date(today - Duration::days(3))
        .build()
        .await
        .unwrap();
    let newest = MenuFactory::new(db)
        .server_id(42)
        .start_date(today)
        .build()
        .await
        .unwrap();

    let found = TavernService::new(db)
        .get_this_weeks_menu(42)
        .await
        .unwrap()
        .expect("one of the overlapping menus should match");

    assert_eq!(found.menu.id, newest.id);
}

/// Creating a menu stamps today as its start date.
#[tokio::test]
async fn created_menu_starts_today() {
    let test = tavern_context().await;
    let db = test.db.as_ref().unwrap();

    let menu = TavernService::new(db).create_menu_for_week(42).await.unwrap();

    assert_eq!(menu.menu.server_id, 42);
    assert_eq!(menu.menu.start_date, Utc::now().date_naive());
    assert!(menu.items.is_empty());
}

/// Inserted items come back when the menu is reloaded.
#[tokio::test]
async fn inserted_items_persist() {
    let test = tavern_context().await;
    let db = test.db.as_ref().unwrap();
    let service = TavernService::new(db);

    let menu = service.create_menu_for_week(42).await.unwrap();
    service
        .insert_menu_item(&menu.menu, "Roast Boar", DayOfWeek::Friday)
        .await
        .unwrap();

    let reloaded = service.get_this_weeks_menu(42).await.unwrap().unwrap();
    assert_eq!(reloaded.items.len(), 1);
    assert_eq!(reloaded.items[0].food, "Roast Boar");
    assert_eq!(reloaded.items[0].day_of_week, DayOfWeek::Friday);
}

/// Deleting a missing item fails with an error embedding the searched name,
/// whether or not a day filter was given.
#[tokio::test]
async fn delete_missing_item_embeds_the_name() {
    let test = tavern_context().await;
    let db = test.db.as_ref().unwrap();
    let menu = MenuFactory::new(db).server_id(42).build().await.unwrap();
    MenuItemFactory::new(db, menu.id)
        .food("Stew")
        .day_of_week(DayOfWeek::Monday)
        .build()
        .await
        .unwrap();

    let service = TavernService::new(db);
    let weekly = service.get_this_weeks_menu(42).await.unwrap().unwrap();

    for day_filter in [None, Some(DayOfWeek::Monday)] {
        let err = service
            .delete_menu_item(&weekly, "Not food", day_filter)
            .await
            .unwrap_err();
        match err {
            AppError::TavernErr(TavernError::NoMenuItemFound { ref name }) => {
                assert_eq!(name, "Not food");
                assert!(err.to_string().contains("Not food"), "{err}");
            }
            other => panic!("expected NoMenuItemFound, got {other:?}"),
        }
    }
}

/// A day filter restricts the scan to that day's items.
#[tokio::test]
async fn delete_honors_the_day_filter() {
    let test = tavern_context().await;
    let db = test.db.as_ref().unwrap();
    let menu = MenuFactory::new(db).server_id(42).build().await.unwrap();
    MenuItemFactory::new(db, menu.id)
        .food("Stew")
        .day_of_week(DayOfWeek::Monday)
        .build()
        .await
        .unwrap();

    let service = TavernService::new(db);
    let weekly = service.get_this_weeks_menu(42).await.unwrap().unwrap();

    // Wrong day: the Monday item is invisible to a Wednesday scan.
    let err = service
        .delete_menu_item(&weekly, "Stew", Some(DayOfWeek::Wednesday))
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            AppError::TavernErr(TavernError::NoMenuItemFound { .. })
        ),
        "{err:?}"
    );

    service
        .delete_menu_item(&weekly, "Stew", Some(DayOfWeek::Monday))
        .await
        .unwrap();

    let reloaded = service.get_this_weeks_menu(42).await.unwrap().unwrap();
    assert!(reloaded.items.is_empty());
}

/// Food names match case-sensitively on delete.
#[tokio::test]
async fn delete_matches_names_case_sensitively() {
    let test = tavern_context().await;
    let db = test.db.as_ref().unwrap();
    let menu = MenuFactory::new(db).server_id(42).build().await.unwrap();
    MenuItemFactory::new(db, menu.id)
        .food("stew")
        .build()
        .await
        .unwrap();

    let service = TavernService::new(db);
    let weekly = service.get_this_weeks_menu(42).await.unwrap().unwrap();

    let err = service
        .delete_menu_item(&weekly, "Stew", None)
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            AppError::TavernErr(TavernError::NoMenuItemFound { .. })
        ),
        "{err:?}"
    );
}
