use super::*;

/// Tests that names differing only in case are treated as equal.
///
/// Expected: Ok(false) for "titanic" when "Titanic" exists
#[tokio::test]
async fn compares_names_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::BoatFactory::new(db, "owner-1")
        .name("Titanic")
        .build()
        .await?;

    let service = BoatService::new(db);

    assert!(!service.name_available("titanic", None).await?);
    assert!(!service.name_available("TITANIC", None).await?);
    assert!(service.name_available("Britannic", None).await?);

    Ok(())
}

/// Tests that names are unique across owners.
///
/// Expected: Ok(false) for another owner's boat name
#[tokio::test]
async fn names_are_unique_across_owners() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::boat::BoatFactory::new(db, "owner-2")
        .name("Orca")
        .build()
        .await?;

    assert!(!BoatService::new(db).name_available("orca", None).await?);

    Ok(())
}

/// Tests that a boat may keep its own name when edited.
///
/// Expected: Ok(true) when excluding the boat that holds the name
#[tokio::test]
async fn boat_may_keep_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::BoatFactory::new(db, "owner-1")
        .name("Orca")
        .build()
        .await?;

    assert!(
        BoatService::new(db)
            .name_available("ORCA", Some(boat.id))
            .await?
    );

    Ok(())
}
