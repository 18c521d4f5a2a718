use super::*;

/// Tests overwriting a load's details.
///
/// Verifies that editing item, volume and creation date leaves the carrier alone.
///
/// Expected: Ok with updated details and the same carrier
#[tokio::test]
async fn updates_details_and_keeps_carrier() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, load) = factory::helpers::create_loaded_boat(db, "owner-1").await?;

    let repo = LoadRepository::new(db);
    let updated = repo
        .update_details(load.id, "Ice".to_string(), 99, "12/31/2024".to_string())
        .await?;

    assert_eq!(updated.item, "Ice");
    assert_eq!(updated.volume, 99);
    assert_eq!(updated.creation_date, "12/31/2024");
    assert_eq!(updated.carrier.map(|c| c.id), Some(boat.id));

    Ok(())
}
