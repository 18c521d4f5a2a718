use super::*;

/// Tests finding a user by subject identifier.
///
/// Expected: Ok(Some) for a stored subject, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .unique_id("sub-1")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_unique_id("sub-1").await?.unwrap();
    assert_eq!(found.id, stored.id);
    assert!(repo.find_by_unique_id("sub-2").await?.is_none());

    Ok(())
}
