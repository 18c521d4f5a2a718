use super::*;

/// Tests that names collide regardless of case.
///
/// Expected: Ok(true) for "titanic" when "Titanic" exists
#[tokio::test]
async fn detects_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::BoatFactory::new(db, "owner-1")
        .name("Titanic")
        .build()
        .await?;

    let repo = BoatRepository::new(db);

    assert!(repo.name_taken("titanic", None).await?);
    assert!(repo.name_taken("TITANIC", None).await?);

    Ok(())
}

/// Tests that names are unique across owners.
///
/// Expected: Ok(true) even though the existing boat belongs to someone else
#[tokio::test]
async fn detects_name_of_other_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::BoatFactory::new(db, "owner-2")
        .name("Orca")
        .build()
        .await?;

    let repo = BoatRepository::new(db);

    assert!(repo.name_taken("orca", None).await?);

    Ok(())
}

/// Tests that the boat being updated does not collide with itself.
///
/// Expected: Ok(false) when the only match is the excluded boat
#[tokio::test]
async fn ignores_excluded_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::BoatFactory::new(db, "owner-1")
        .name("Orca")
        .build()
        .await?;

    let repo = BoatRepository::new(db);

    assert!(!repo.name_taken("ORCA", Some(boat.id)).await?);

    Ok(())
}

/// Tests that an unused name is free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn free_name_is_not_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::create_boat(db, "owner-1").await?;

    let repo = BoatRepository::new(db);

    assert!(!repo.name_taken("Mary Rose", None).await?);

    Ok(())
}
