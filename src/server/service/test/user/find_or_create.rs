use super::*;

fn profile(unique_id: &str) -> GoogleProfile {
    GoogleProfile {
        unique_id: unique_id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    }
}

/// Tests the first login of a user.
///
/// Expected: Ok with a new user stored
#[tokio::test]
async fn creates_user_on_first_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.find_or_create(profile("1234")).await?;

    assert_eq!(user.unique_id, "1234");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests a repeated login.
///
/// Expected: Ok with the stored user and no duplicate
#[tokio::test]
async fn returns_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_marina_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .unique_id("1234")
        .first_name("Grace")
        .build()
        .await?;

    let service = UserService::new(db);
    let user = service.find_or_create(profile("1234")).await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.first_name, "Grace");
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
