use super::*;

/// Tests deleting an existing load.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_load() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let load = factory::load::create_load(db).await?;

    let repo = LoadRepository::new(db);

    assert!(repo.delete(load.id).await?);
    assert!(repo.find_by_id(load.id).await?.is_none());
    assert!(!repo.delete(load.id).await?);

    Ok(())
}
