use super::*;

/// Tests clearing every load carried by a boat.
///
/// Verifies that loads on other boats and unassigned loads are not touched.
///
/// Expected: Ok(1) with only the boat's load unassigned
#[tokio::test]
async fn clears_only_loads_of_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, carried) = factory::helpers::create_loaded_boat(db, "owner-1").await?;
    let (other_boat, other) = factory::helpers::create_loaded_boat(db, "owner-1").await?;
    let loose = factory::load::create_load(db).await?;

    let repo = LoadRepository::new(db);

    assert_eq!(repo.clear_carrier(boat.id).await?, 1);

    assert!(repo.find_by_id(carried.id).await?.unwrap().carrier.is_none());
    assert_eq!(
        repo.find_by_id(other.id).await?.unwrap().carrier.map(|c| c.id),
        Some(other_boat.id)
    );
    assert!(repo.find_by_id(loose.id).await?.unwrap().carrier.is_none());

    Ok(())
}
