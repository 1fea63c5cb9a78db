use super::*;

/// Tests finding an account by its login email.
///
/// Verifies that the repository locates the account registered under the
/// given email among several accounts.
///
/// Expected: Ok with the matching account
#[tokio::test]
async fn finds_account_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let target = factory::user::UserFactory::new(db)
        .email("target@example.com")
        .name("Target")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.get_by_email("target@example.com").await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.as_ref().map(|u| u.id), Some(target.id));
    assert_eq!(user.map(|u| u.name), Some("Target".to_string()));

    Ok(())
}

/// Tests looking up an email nobody registered with.
///
/// Verifies that an unknown email resolves to no account rather than an
/// error.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.get_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
