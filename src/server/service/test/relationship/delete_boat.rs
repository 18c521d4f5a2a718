use super::*;

/// Tests deleting a boat that carries loads.
///
/// Verifies that every load it carried is left without a carrier.
///
/// Expected: Ok with the boat gone and its loads unassigned
#[tokio::test]
async fn unassigns_carried_loads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, first) = factory::helpers::create_loaded_boat(db, "owner-1").await?;
    let second = factory::create_load(db).await?;

    let service = RelationshipService::new(db);
    service.assign(boat.id, second.id, "owner-1").await?;
    service.delete_boat(boat.id, "owner-1").await?;

    assert!(BoatRepository::new(db).find_by_id(boat.id).await?.is_none());

    let load_repo = LoadRepository::new(db);
    for id in [first.id, second.id] {
        let load = load_repo.find_by_id(id).await?.unwrap();
        assert!(load.carrier.is_none());
    }

    Ok(())
}

/// Tests that loads on other boats keep their carrier.
///
/// Expected: Ok with the other boat's load unchanged
#[tokio::test]
async fn leaves_other_boats_loads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, _) = factory::helpers::create_loaded_boat(db, "owner-1").await?;
    let (other, other_load) = factory::helpers::create_loaded_boat(db, "owner-1").await?;

    RelationshipService::new(db)
        .delete_boat(boat.id, "owner-1")
        .await?;

    let load = LoadRepository::new(db).find_by_id(other_load.id).await?.unwrap();
    assert_eq!(load.carrier.unwrap().id, other.id);

    Ok(())
}

/// Tests deleting boat A, owned by u1 and carrying L1, as u2.
///
/// Expected: Err(Forbidden) with the boat kept and L1 still on it
#[tokio::test]
async fn rejects_other_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, load) = factory::helpers::create_loaded_boat(db, "u1").await?;

    let result = RelationshipService::new(db).delete_boat(boat.id, "u2").await;

    assert!(matches!(
        result,
        Err(AppError::RelationshipErr(RelationshipError::Forbidden(_)))
    ));

    assert!(BoatRepository::new(db).find_by_id(boat.id).await?.is_some());
    let load_after = LoadRepository::new(db).find_by_id(load.id).await?.unwrap();
    assert_eq!(load_after.carrier.unwrap().id, boat.id);

    Ok(())
}

/// Tests deleting a boat that does not exist.
///
/// Expected: Err(BoatNotFound)
#[tokio::test]
async fn rejects_missing_boat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RelationshipService::new(db).delete_boat(9999, "owner-1").await;

    assert!(matches!(
        result,
        Err(AppError::RelationshipErr(RelationshipError::BoatNotFound))
    ));

    Ok(())
}

/// Tests that a failure unassigning loads keeps the boat.
///
/// Expected: Err with the boat and its load relationship intact
#[tokio::test]
async fn rolls_back_when_unassigning_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, load) = factory::helpers::create_loaded_boat(db, "owner-1").await?;

    db.execute_unprepared(BLOCK_LOAD_UPDATES).await?;

    let result = RelationshipService::new(db)
        .delete_boat(boat.id, "owner-1")
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    let boat_after = BoatRepository::new(db).find_by_id(boat.id).await?.unwrap();
    assert_eq!(boat_after.loads, vec![load.id]);

    Ok(())
}
