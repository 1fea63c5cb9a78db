use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the user is authenticated,
/// exists in the database, and has admin privileges.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create admin user
    let user = factory::user::UserFactory::new(db)
        .name("Admin User")
        .admin(true)
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check admin permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.name, "Admin User");
    assert!(returned_user.admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Verifies that the AuthGuard denies access when the user is authenticated,
/// exists in the database, but lacks admin privileges.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create non-admin user
    let user = factory::user::UserFactory::new(db)
        .admin(false)
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check admin permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_err());
    let error = result.unwrap_err();
    match error {
        AppError::AuthErr(auth_error) => match auth_error {
            AuthError::AccessDenied(user_id, message) => {
                assert_eq!(user_id, user.id);
                assert!(message.contains("admin"));
            }
            _ => panic!("Expected AccessDenied error, got: {:?}", auth_error),
        },
        _ => panic!("Expected AuthError, got: {:?}", error),
    }

    Ok(())
}

/// Tests unauthenticated user is denied admin permission.
///
/// Verifies that the AuthGuard denies access when there is no user ID
/// in the session (user not logged in).
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Don't set user in session - simulate unauthenticated request

    // Check admin permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_err());
    let error = result.unwrap_err();
    match error {
        AppError::AuthErr(auth_error) => match auth_error {
            AuthError::UserNotInSession => {}
            _ => panic!("Expected UserNotInSession error, got: {:?}", auth_error),
        },
        _ => panic!("Expected AuthError, got: {:?}", error),
    }

    Ok(())
}

/// Tests user in session but not in database is denied.
///
/// Verifies that the AuthGuard denies access when the user ID exists in
/// the session but the user record does not exist in the database.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Set user ID in session without creating user in database
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(4242).await?;

    // Check admin permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_err());
    let error = result.unwrap_err();
    match error {
        AppError::AuthErr(auth_error) => match auth_error {
            AuthError::UserNotInDatabase(user_id) => {
                assert_eq!(user_id, 4242);
            }
            _ => panic!("Expected UserNotInDatabase error, got: {:?}", auth_error),
        },
        _ => panic!("Expected AuthError, got: {:?}", error),
    }

    Ok(())
}
