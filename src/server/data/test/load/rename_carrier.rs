use super::*;

/// Tests refreshing the carrier name after a boat rename.
///
/// Expected: Ok with the new name on the carried load
#[tokio::test]
async fn refreshes_carrier_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, load) = factory::helpers::create_loaded_boat(db, "owner-1").await?;

    let repo = LoadRepository::new(db);

    assert_eq!(repo.rename_carrier(boat.id, "Renamed").await?, 1);

    let carrier = repo.find_by_id(load.id).await?.unwrap().carrier.unwrap();
    assert_eq!(carrier.id, boat.id);
    assert_eq!(carrier.name, "Renamed");

    Ok(())
}
