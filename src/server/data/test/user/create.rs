use super::*;

/// Tests creating a new user account.
///
/// Verifies that the user repository successfully creates an account with
/// the given name, email, and password hash, and that the account can be
/// read back by ID.
///
/// Expected: Ok with the account created and no admin privileges
#[tokio::test]
async fn creates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Ana Lima".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            admin: false,
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.name, "Ana Lima");
    assert_eq!(user.email, "ana@example.com");
    assert!(!user.admin);

    let fetched = repo.get_by_id(user.id).await?;
    assert_eq!(fetched.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests creating an account with admin privileges.
///
/// Verifies that the admin flag on the creation parameters is persisted.
///
/// Expected: Ok with the account created and admin set to true
#[tokio::test]
async fn stores_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Root Admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            admin: true,
        })
        .await?;

    assert!(user.admin);

    Ok(())
}

/// Tests creating a second account with an already registered email.
///
/// Verifies that the unique constraint on the email column rejects the
/// duplicate instead of silently overwriting the first account.
///
/// Expected: Err on the second create
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParam {
        name: "First".to_string(),
        email: "taken@example.com".to_string(),
        password_hash: "argon2-hash".to_string(),
        admin: false,
    })
    .await?;

    let result = repo
        .create(CreateUserParam {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
