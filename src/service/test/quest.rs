use crate::error::{quest::QuestError, AppError};
use crate::service::quest::QuestService;
use test_utils::builder::TestBuilder;
use test_utils::context::TestContext;
use test_utils::factory::quest::QuestFactory;
use test_utils::factory::user::create_user;

async fn quest_context() -> TestContext {
    TestBuilder::new().with_quest_tables().build().await.unwrap()
}

/// A fresh quest can be accepted once; an immediate second accept for the
/// same pair fails as a duplicate.
#[tokio::test]
async fn accept_succeeds_then_duplicate_accept_fails() {
    let test = quest_context().await;
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await.unwrap();
    QuestFactory::new(db)
        .name("Fetch Water")
        .build()
        .await
        .unwrap();

    let service = QuestService::new(db);
    let reply = service
        .accept_quest_if_available(&user, "Fetch Water")
        .await
        .unwrap();
    assert_eq!(reply, "You have accepted Fetch Water! Good luck adventurer");

    let err = service
        .accept_quest_if_available(&user, "Fetch Water")
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            AppError::QuestErr(QuestError::AlreadyAccepted { .. })
        ),
        "{err:?}"
    );
}

/// Quest names match case-insensitively on the full name.
#[tokio::test]
async fn accept_matches_names_case_insensitively() {
    let test = quest_context().await;
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await.unwrap();
    QuestFactory::new(db)
        .name("Fetch Water")
        .build()
        .await
        .unwrap();

    let service = QuestService::new(db);
    let reply = service
        .accept_quest_if_available(&user, "fetch water")
        .await
        .unwrap();

    assert_eq!(reply, "You have accepted fetch water! Good luck adventurer");
}

/// Accepting and completing a quest that does not exist both fail with the
/// does-not-exist error.
#[tokio::test]
async fn unknown_quest_fails_for_both_verbs() {
    let test = quest_context().await;
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await.unwrap();

    let service = QuestService::new(db);

    let accept_err = service
        .accept_quest_if_available(&user, "Nonexistent")
        .await
        .unwrap_err();
    assert!(
        matches!(
            accept_err,
            AppError::QuestErr(QuestError::DoesNotExist { .. })
        ),
        "{accept_err:?}"
    );

    let complete_err = service
        .complete_quest_if_available(&user, "Nonexistent")
        .await
        .unwrap_err();
    assert!(
        matches!(
            complete_err,
            AppError::QuestErr(QuestError::DoesNotExist { .. })
        ),
        "{complete_err:?}"
    );
}

/// Completing a quest never accepted by the user fails.
#[tokio::test]
async fn complete_without_accept_fails() {
    let test = quest_context().await;
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await.unwrap();
    QuestFactory::new(db)
        .name("Fetch Water")
        .build()
        .await
        .unwrap();

    let service = QuestService::new(db);
    let err = service
        .complete_quest_if_available(&user, "Fetch Water")
        .await
        .unwrap_err();

    assert!(
        matches!(err, AppError::QuestErr(QuestError::NotAccepted { .. })),
        "{err:?}"
    );
}

/// A quest capped at one completion still allows re-accepting after the
/// first cycle, but the second completion attempt hits the cap.
#[tokio::test]
async fn completion_cap_blocks_completion_but_not_reaccept() {
    let test = quest_context().await;
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await.unwrap();
    QuestFactory::new(db)
        .name("Fetch Water")
        .max_completion_count(1)
        .build()
        .await
        .unwrap();

    let service = QuestService::new(db);

    service
        .accept_quest_if_available(&user, "Fetch Water")
        .await
        .unwrap();
    service
        .complete_quest_if_available(&user, "Fetch Water")
        .await
        .unwrap();

    // Re-accepting after the cap is reached still works.
    service
        .accept_quest_if_available(&user, "Fetch Water")
        .await
        .unwrap();

    let err = service
        .complete_quest_if_available(&user, "Fetch Water")
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            AppError::QuestErr(QuestError::MaxCompletionReached { .. })
        ),
        "{err:?}"
    );
}

/// An uncapped quest supports repeated accept/complete cycles without ever
/// hitting the completion cap.
#[tokio::test]
async fn uncapped_quest_cycles_indefinitely() {
    let test = quest_context().await;
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await.unwrap();
    QuestFactory::new(db)
        .name("Fetch Water")
        .build()
        .await
        .unwrap();

    let service = QuestService::new(db);

    for _ in 0..3 {
        service
            .accept_quest_if_available(&user, "Fetch Water")
            .await
            .unwrap();
        service
            .complete_quest_if_available(&user, "Fetch Water")
            .await
            .unwrap();
    }
}

/// The caps of one user do not bleed into another user's progress.
#[tokio::test]
async fn completion_counts_are_per_user() {
    let test = quest_context().await;
    let db = test.db.as_ref().unwrap();
    let first = create_user(db).await.unwrap();
    let second = create_user(db).await.unwrap();
    QuestFactory::new(db)
        .name("Fetch Water")
        .max_completion_count(1)
        .build()
        .await
        .unwrap();

    let service = QuestService::new(db);

    service
        .accept_quest_if_available(&first, "Fetch Water")
        .await
        .unwrap();
    service
        .complete_quest_if_available(&first, "Fetch Water")
        .await
        .unwrap();

    // The second user starts their own cycle unaffected.
    service
        .accept_quest_if_available(&second, "Fetch Water")
        .await
        .unwrap();
    service
        .complete_quest_if_available(&second, "Fetch Water")
        .await
        .unwrap();
}
