use super::*;

/// Tests creating a new load.
///
/// Expected: Ok with load created and no carrier
#[tokio::test]
async fn creates_unassigned_load() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoadRepository::new(db);
    let load = repo
        .create(CreateLoadParams {
            item: "Crab pots".to_string(),
            volume: 12,
            creation_date: "03/14/2024".to_string(),
        })
        .await?;

    assert_eq!(load.item, "Crab pots");
    assert_eq!(load.volume, 12);
    assert_eq!(load.creation_date, "03/14/2024");
    assert!(load.carrier.is_none());

    Ok(())
}
