use super::*;

/// Tests overwriting a boat's details.
///
/// Verifies that name, type and length change while owner and loads are kept.
///
/// Expected: Ok with updated details
#[tokio::test]
async fn updates_details_and_keeps_loads() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, load) = factory::helpers::create_loaded_boat(db, "owner-1").await?;

    let repo = BoatRepository::new(db);
    let updated = repo
        .update_details(boat.id, "Renamed".to_string(), "Ketch".to_string(), 55)
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.boat_type, "Ketch");
    assert_eq!(updated.length, 55);
    assert_eq!(updated.owner, "owner-1");
    assert_eq!(updated.loads, vec![load.id]);

    Ok(())
}

/// Tests updating a boat that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);
    let result = repo
        .update_details(999, "Ghost".to_string(), "Sloop".to_string(), 1)
        .await;

    assert!(result.is_err());

    Ok(())
}
