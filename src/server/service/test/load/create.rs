use super::*;

/// Tests creating a load.
///
/// Expected: Ok with the given attributes and no carrier
#[tokio::test]
async fn creates_unassigned_load() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LoadService::new(db);
    let load = service
        .create(CreateLoadParams {
            item: "Rope".to_string(),
            volume: 4,
            creation_date: "10/18/2026".to_string(),
        })
        .await?;

    assert_eq!(load.item, "Rope");
    assert_eq!(load.volume, 4);
    assert_eq!(load.creation_date, "10/18/2026");
    assert!(load.carrier.is_none());

    let stored = service.get(load.id).await?;
    assert_eq!(stored, load);

    Ok(())
}

/// Tests getting a load that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn get_rejects_missing_load() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LoadService::new(db).get(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
