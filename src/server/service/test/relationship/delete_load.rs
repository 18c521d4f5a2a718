use super::*;

/// Tests deleting a load that sits on a boat.
///
/// Expected: Ok with the load gone and no longer listed on the boat
#[tokio::test]
async fn removes_load_from_carrier() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, load) = factory::helpers::create_loaded_boat(db, "owner-1").await?;
    let kept = factory::create_load(db).await?;

    let service = RelationshipService::new(db);
    service.assign(boat.id, kept.id, "owner-1").await?;
    service.delete_load(load.id).await?;

    assert!(LoadRepository::new(db).find_by_id(load.id).await?.is_none());

    let boat_after = BoatRepository::new(db).find_by_id(boat.id).await?.unwrap();
    assert_eq!(boat_after.loads, vec![kept.id]);

    Ok(())
}

/// Tests deleting an unassigned load.
///
/// Expected: Ok with the load gone
#[tokio::test]
async fn deletes_unassigned_load() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let load = factory::create_load(db).await?;

    RelationshipService::new(db).delete_load(load.id).await?;

    assert!(LoadRepository::new(db).find_by_id(load.id).await?.is_none());

    Ok(())
}

/// Tests deleting a load that does not exist.
///
/// Expected: Err(LoadNotFound)
#[tokio::test]
async fn rejects_missing_load() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RelationshipService::new(db).delete_load(9999).await;

    assert!(matches!(
        result,
        Err(AppError::RelationshipErr(RelationshipError::LoadNotFound))
    ));

    Ok(())
}
