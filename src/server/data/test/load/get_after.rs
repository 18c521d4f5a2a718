use super::*;

/// Tests paging through every load.
///
/// Expected: Ok with the loads following the cursor, capped at the limit
#[tokio::test]
async fn pages_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::load::create_load(db).await?.id);
    }

    let repo = LoadRepository::new(db);

    let first: Vec<i32> = repo.get_after(None, 2).await?.iter().map(|l| l.id).collect();
    assert_eq!(first, vec![ids[0], ids[1]]);

    let rest: Vec<i32> = repo
        .get_after(Some(ids[1]), 2)
        .await?
        .iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(rest, vec![ids[2]]);

    assert_eq!(repo.count().await?, 3);

    Ok(())
}
