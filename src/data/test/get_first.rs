use super::*;

use entity::prelude::Quest;
use entity::quest;
use test_utils::factory::quest::QuestFactory;

/// Tests that get_first returns the first row by the requested order and
/// never errors on multiple matches.
#[tokio::test]
async fn returns_first_row_by_requested_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Quest).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    QuestFactory::new(db).experience(10).build().await?;
    QuestFactory::new(db).experience(30).build().await?;

    let repo = Repository::<Quest>::new(db);
    let args = QueryArgs::<Quest>::builder()
        .order_by_desc(quest::Column::Experience)
        .build()
        .unwrap();
    let quest = repo.get_first(args).await?;

    assert_eq!(quest.map(|quest| quest.experience), Some(30));

    Ok(())
}

/// Tests that zero matches return None rather than an error.
#[tokio::test]
async fn returns_none_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Quest).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = Repository::<Quest>::new(db);
    let quest = repo.get_first(QueryArgs::default()).await?;

    assert!(quest.is_none());

    Ok(())
}
