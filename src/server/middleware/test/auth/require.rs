use super::*;

mod require_admin;
mod require_clinic_member;

/// Tests multiple permissions are all checked.
///
/// Verifies that when multiple permissions are required, all of them
/// must be satisfied for access to be granted.
///
/// Expected: Ok(User) when all permissions are met
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create an admin user who is also a clinic member
    let user = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await?;
    let clinic = factory::clinic::create_clinic(db).await?;
    factory::user_clinic::create_membership(db, user.id, clinic.id).await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check both permissions at once
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Admin, Permission::ClinicMember(clinic.id)])
        .await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Verifies that when checking multiple permissions, if the user lacks
/// any one of them, access is denied. The admin flag does not stand in
/// for a clinic membership row.
///
/// Expected: Err(AuthError::AccessDenied) for the failed permission
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create an admin user with no membership row
    let user = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await?;
    let clinic = factory::clinic::create_clinic(db).await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check both permissions - user is admin but not a member
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Admin, Permission::ClinicMember(clinic.id)])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("member"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create regular user
    let user = factory::user::UserFactory::new(db)
        .admin(false)
        .build()
        .await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check with empty permissions list
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);

    Ok(())
}
