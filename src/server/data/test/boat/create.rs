use super::*;

/// Tests creating a new boat.
///
/// Verifies that the repository stores the name, type, length and owner and that a
/// new boat carries no loads.
///
/// Expected: Ok with boat created and empty loads
#[tokio::test]
async fn creates_boat_without_loads() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);
    let boat = repo
        .create(CreateBoatParams {
            name: "Orca".to_string(),
            boat_type: "Trawler".to_string(),
            length: 42,
            owner: "owner-1".to_string(),
        })
        .await?;

    assert_eq!(boat.name, "Orca");
    assert_eq!(boat.boat_type, "Trawler");
    assert_eq!(boat.length, 42);
    assert_eq!(boat.owner, "owner-1");
    assert!(boat.loads.is_empty());

    let stored = entity::prelude::Boat::find_by_id(boat.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that every created boat gets its own id.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);
    let params = CreateBoatParams {
        name: "Orca".to_string(),
        boat_type: "Trawler".to_string(),
        length: 42,
        owner: "owner-1".to_string(),
    };

    let first = repo.create(params.clone()).await?;
    let second = repo
        .create(CreateBoatParams {
            name: "Narwhal".to_string(),
            ..params
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
