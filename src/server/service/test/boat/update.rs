use super::*;

fn params(id: i32, owner: &str) -> UpdateBoatParams {
    UpdateBoatParams {
        id,
        owner: owner.to_string(),
        name: None,
        boat_type: None,
        length: None,
    }
}

/// Tests a partial edit.
///
/// Verifies that attributes missing from the parameters keep their stored values.
///
/// Expected: Ok with only the length changed
#[tokio::test]
async fn keeps_missing_attributes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::BoatFactory::new(db, "owner-1")
        .name("Orca")
        .boat_type("Ketch")
        .length(30)
        .build()
        .await?;

    let updated = BoatService::new(db)
        .update(UpdateBoatParams {
            length: Some(45),
            ..params(boat.id, "owner-1")
        })
        .await?;

    assert_eq!(updated.name, "Orca");
    assert_eq!(updated.boat_type, "Ketch");
    assert_eq!(updated.length, 45);

    Ok(())
}

/// Tests an edit whose body carries an empty name and a zero length.
///
/// Expected: Ok with the stored name and length kept and the type changed
#[tokio::test]
async fn blank_values_keep_stored_attributes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::BoatFactory::new(db, "owner-1")
        .name("Orca")
        .length(30)
        .build()
        .await?;

    let dto = BoatInputDto {
        name: Some(String::new()),
        boat_type: Some("Yawl".to_string()),
        length: Some(0),
    };
    let params = UpdateBoatParams::partial(boat.id, "owner-1".to_string(), dto).unwrap();

    let updated = BoatService::new(db).update(params).await?;

    assert_eq!(updated.name, "Orca");
    assert_eq!(updated.boat_type, "Yawl");
    assert_eq!(updated.length, 30);

    Ok(())
}

/// Tests renaming a boat that carries a load.
///
/// Expected: Ok with the load's carrier name following the boat
#[tokio::test]
async fn rename_updates_carried_loads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, load) = factory::helpers::create_loaded_boat(db, "owner-1").await?;

    BoatService::new(db)
        .update(UpdateBoatParams {
            name: Some("Renamed".to_string()),
            ..params(boat.id, "owner-1")
        })
        .await?;

    let load_after = LoadRepository::new(db).find_by_id(load.id).await?.unwrap();
    let carrier = load_after.carrier.unwrap();
    assert_eq!(carrier.id, boat.id);
    assert_eq!(carrier.name, "Renamed");

    Ok(())
}

/// Tests editing a boat owned by someone else.
///
/// Expected: Err(Forbidden) with the boat unchanged
#[tokio::test]
async fn rejects_other_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::create_boat(db, "owner-1").await?;

    let service = BoatService::new(db);
    let result = service
        .update(UpdateBoatParams {
            name: Some("Stolen".to_string()),
            ..params(boat.id, "owner-2")
        })
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let stored = service.get(boat.id, "owner-1").await?;
    assert_eq!(stored.name, boat.name);

    Ok(())
}

/// Tests editing a boat that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_boat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoatService::new(db)
        .update(UpdateBoatParams {
            length: Some(10),
            ..params(9999, "owner-1")
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
