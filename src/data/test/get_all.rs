use super::*;

use crate::data::query::JoinSpec;
use entity::prelude::{Quest, UserQuest};
use entity::{quest, user_quest};
use sea_orm::{ColumnTrait, RelationTrait};
use test_utils::factory::quest::QuestFactory;
use test_utils::factory::user::create_user;
use test_utils::factory::user_quest::create_accepted_quest;

/// Tests fetching with no rows in the table.
///
/// Expected: Ok with an empty vector, not an error.
#[tokio::test]
async fn returns_empty_when_no_rows_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Quest).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = Repository::<Quest>::new(db);
    let quests = repo.get_all(QueryArgs::default()).await?;

    assert!(quests.is_empty());

    Ok(())
}

/// Tests that filters and ordering from the query arguments shape the
/// result.
///
/// Expected: only rows passing the predicate, in descending order.
#[tokio::test]
async fn applies_filters_and_ordering() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Quest).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    QuestFactory::new(db).experience(10).build().await?;
    QuestFactory::new(db).experience(30).build().await?;
    QuestFactory::new(db).experience(20).build().await?;

    let repo = Repository::<Quest>::new(db);
    let args = QueryArgs::<Quest>::builder()
        .filter(quest::Column::Experience.gte(20))
        .order_by_desc(quest::Column::Experience)
        .build()
        .unwrap();
    let quests = repo.get_all(args).await?;

    let rewards: Vec<i32> = quests.iter().map(|quest| quest.experience).collect();
    assert_eq!(rewards, vec![30, 20]);

    Ok(())
}

/// Tests joining through a relation and filtering on the joined table.
///
/// Expected: only acceptance rows belonging to the named quest.
#[tokio::test]
async fn joins_restrict_to_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let fetch_water = QuestFactory::new(db).name("Fetch Water").build().await?;
    let other = QuestFactory::new(db).name("Slay Rats").build().await?;
    create_accepted_quest(db, user.id, fetch_water.id).await?;
    create_accepted_quest(db, user.id, other.id).await?;

    let repo = Repository::<UserQuest>::new(db);
    let args = QueryArgs::<UserQuest>::builder()
        .join(JoinSpec::inner(user_quest::Relation::Quest.def()))
        .filter(quest::Column::Name.eq("Fetch Water"))
        .build()
        .unwrap();
    let rows = repo.get_all(args).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quest_id, fetch_water.id);

    Ok(())
}
