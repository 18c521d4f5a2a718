use super::*;

/// Tests a partial edit of a carried load.
///
/// Verifies that missing attributes keep their values and the carrier is untouched.
///
/// Expected: Ok with only the volume changed
#[tokio::test]
async fn keeps_missing_attributes_and_carrier() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, load) = factory::helpers::create_loaded_boat(db, "owner-1").await?;

    let updated = LoadService::new(db)
        .update(UpdateLoadParams {
            id: load.id,
            item: None,
            volume: Some(99),
            creation_date: None,
        })
        .await?;

    assert_eq!(updated.item, load.item);
    assert_eq!(updated.volume, 99);
    assert_eq!(updated.creation_date, load.creation_date);
    assert_eq!(updated.carrier.unwrap().id, boat.id);

    Ok(())
}

/// Tests editing a load that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_load() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LoadService::new(db)
        .update(UpdateLoadParams {
            id: 9999,
            item: Some("Rope".to_string()),
            volume: None,
            creation_date: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
