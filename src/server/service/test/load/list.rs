use super::*;

/// Tests paging through loads.
///
/// Expected: Ok with five loads, then the remaining one
#[tokio::test]
async fn pages_through_loads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..6 {
        ids.push(factory::create_load(db).await?.id);
    }

    let service = LoadService::new(db);

    let first = service.list(None).await?;
    assert_eq!(first.total, 6);
    assert_eq!(first.loads.len(), 5);
    let cursor = first.next_cursor.unwrap();

    let second = service.list(Some(cursor.parse().unwrap())).await?;
    assert_eq!(
        second.loads.iter().map(|l| l.id).collect::<Vec<_>>(),
        vec![ids[5]]
    );
    assert!(second.next_cursor.is_none());

    Ok(())
}
