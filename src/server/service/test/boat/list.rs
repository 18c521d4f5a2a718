use super::*;

/// Tests paging through the caller's boats.
///
/// Verifies that pages hold five boats, that the cursor continues where the first
/// page stopped, and that boats of other owners are never listed or counted.
///
/// Expected: Ok with a full first page and a short last page
#[tokio::test]
async fn pages_through_owned_boats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut owned = Vec::new();
    for _ in 0..7 {
        owned.push(factory::create_boat(db, "owner-1").await?.id);
    }
    factory::create_boat(db, "owner-2").await?;

    let service = BoatService::new(db);

    let first = service.list("owner-1", None).await?;
    assert_eq!(first.total_boats, 7);
    assert_eq!(
        first.boats.iter().map(|b| b.id).collect::<Vec<_>>(),
        owned[..5].to_vec()
    );
    let cursor = first.next_cursor.unwrap();
    assert_eq!(cursor, owned[4].to_string());

    let second = service
        .list("owner-1", Some(cursor.parse().unwrap()))
        .await?;
    assert_eq!(second.total_boats, 7);
    assert_eq!(
        second.boats.iter().map(|b| b.id).collect::<Vec<_>>(),
        owned[5..].to_vec()
    );
    assert!(second.next_cursor.is_none());

    Ok(())
}

/// Tests that exactly one page of boats has no next cursor.
///
/// Expected: Ok with five boats and no cursor
#[tokio::test]
async fn exact_page_has_no_cursor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_boat(db, "owner-1").await?;
    }

    let page = BoatService::new(db).list("owner-1", None).await?;

    assert_eq!(page.boats.len(), 5);
    assert!(page.next_cursor.is_none());

    Ok(())
}

/// Tests listing for a caller without boats.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn empty_for_owner_without_boats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_boat(db, "owner-2").await?;

    let page = BoatService::new(db).list("owner-1", None).await?;

    assert!(page.boats.is_empty());
    assert_eq!(page.total_boats, 0);
    assert!(page.next_cursor.is_none());

    Ok(())
}
