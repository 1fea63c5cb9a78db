use super::*;

/// Tests clinic member successfully passes membership check.
///
/// Verifies that the AuthGuard grants access when the user has a
/// membership row for the requested clinic.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_clinic_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create a member of the clinic
    let user = factory::user::UserFactory::new(db)
        .admin(false)
        .build()
        .await?;
    let clinic = factory::clinic::create_clinic(db).await?;
    factory::user_clinic::create_membership(db, user.id, clinic.id).await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check membership permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::ClinicMember(clinic.id)])
        .await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);

    Ok(())
}

/// Tests user without a membership row is denied.
///
/// Verifies that the AuthGuard denies access when the user exists but
/// has no membership row for the requested clinic.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create a user who is not a member of any clinic
    let user = factory::user::UserFactory::new(db)
        .admin(false)
        .build()
        .await?;
    let clinic = factory::clinic::create_clinic(db).await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check membership permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::ClinicMember(clinic.id)])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("member"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests the admin flag does not substitute for membership.
///
/// Verifies that a platform admin without a membership row is still
/// denied access to clinic-scoped data.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_without_membership() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create an admin with no membership row
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await?;
    let clinic = factory::clinic::create_clinic(db).await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(admin.id).await?;

    // Check membership permission
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::ClinicMember(clinic.id)])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, admin.id);
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests membership in one clinic does not grant access to another.
///
/// Verifies that the AuthGuard checks the membership row for the exact
/// clinic requested, not membership in general.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member_of_other_clinic() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Create a user who belongs to a different clinic
    let user = factory::user::UserFactory::new(db)
        .admin(false)
        .build()
        .await?;
    let home_clinic = factory::clinic::create_clinic(db).await?;
    let other_clinic = factory::clinic::create_clinic(db).await?;
    factory::user_clinic::create_membership(db, user.id, home_clinic.id).await?;

    // Set user in session
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    // Check membership against the clinic the user does NOT belong to
    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::ClinicMember(other_clinic.id)])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, user.id);
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
