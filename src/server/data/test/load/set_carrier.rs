use super::*;

/// Tests assigning and clearing a carrier.
///
/// Expected: Ok with carrier set, then Ok with carrier cleared
#[tokio::test]
async fn sets_and_clears_carrier() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let load = factory::load::create_load(db).await?;

    let repo = LoadRepository::new(db);
    let assigned = repo
        .set_carrier(
            load.id,
            Some(Carrier {
                id: 4,
                name: "Orca".to_string(),
            }),
        )
        .await?;

    assert_eq!(
        assigned.carrier,
        Some(Carrier {
            id: 4,
            name: "Orca".to_string()
        })
    );

    let cleared = repo.set_carrier(load.id, None).await?;
    assert!(cleared.carrier.is_none());

    let stored = entity::prelude::Load::find_by_id(load.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.carrier_id.is_none());
    assert!(stored.carrier_name.is_none());

    Ok(())
}
