use super::*;

/// Tests deleting an existing boat.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::create_boat(db, "owner-1").await?;

    let repo = BoatRepository::new(db);

    assert!(repo.delete(boat.id).await?);
    assert!(repo.find_by_id(boat.id).await?.is_none());

    Ok(())
}

/// Tests deleting a boat that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);

    assert!(!repo.delete(12345).await?);

    Ok(())
}
