use super::*;

/// Tests the first-run check against an empty user table.
///
/// Verifies that the repository reports no accounts when none were
/// registered, the state in which registration requires the setup code.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.any_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}

/// Tests the first-run check once an account exists.
///
/// Verifies that a single registered account flips the check.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_existing_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.any_exists().await?);

    Ok(())
}
