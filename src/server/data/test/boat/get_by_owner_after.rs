use super::*;

/// Tests that only the owner's boats are returned.
///
/// Expected: Ok with the two boats of owner-1 only
#[tokio::test]
async fn filters_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::boat::create_boat(db, "owner-1").await?;
    factory::boat::create_boat(db, "owner-2").await?;
    let second = factory::boat::create_boat(db, "owner-1").await?;

    let repo = BoatRepository::new(db);
    let boats = repo.get_by_owner_after("owner-1", None, 10).await?;

    let ids: Vec<i32> = boats.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(repo.count_by_owner("owner-1").await?, 2);

    Ok(())
}

/// Tests that results start after the cursor and respect the limit.
///
/// Expected: Ok with the boats following the cursor, capped at the limit
#[tokio::test]
async fn continues_after_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::boat::create_boat(db, "owner-1").await?.id);
    }

    let repo = BoatRepository::new(db);
    let boats = repo.get_by_owner_after("owner-1", Some(ids[0]), 2).await?;

    let page: Vec<i32> = boats.iter().map(|b| b.id).collect();
    assert_eq!(page, vec![ids[1], ids[2]]);

    Ok(())
}
