use super::*;

/// Tests granting a user membership in a clinic.
///
/// Verifies that after the grant the membership check passes for that user
/// and clinic pair.
///
/// Expected: Ok with the user reported as a member
#[tokio::test]
async fn grants_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let clinic = factory::create_clinic(db).await?;

    let repo = UserClinicRepository::new(db);
    assert!(!repo.is_member(user.id, clinic.id).await?);

    repo.add_member(user.id, clinic.id).await?;

    assert!(repo.is_member(user.id, clinic.id).await?);

    Ok(())
}

/// Tests granting a membership the user already holds.
///
/// Verifies that the repeated grant neither errors nor duplicates the
/// membership row.
///
/// Expected: Ok with a single member listed
#[tokio::test]
async fn repeated_grant_is_harmless() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let clinic = factory::create_clinic(db).await?;

    let repo = UserClinicRepository::new(db);
    repo.add_member(user.id, clinic.id).await?;
    repo.add_member(user.id, clinic.id).await?;

    let members = repo.get_members(clinic.id).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, user.id);

    Ok(())
}

/// Tests the membership check against another clinic.
///
/// Verifies that membership in one clinic grants nothing in another.
///
/// Expected: Ok(false) for the clinic the user never joined
#[tokio::test]
async fn membership_does_not_leak_across_clinics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let joined = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = UserClinicRepository::new(db);
    repo.add_member(user.id, joined.id).await?;

    assert!(repo.is_member(user.id, joined.id).await?);
    assert!(!repo.is_member(user.id, other.id).await?);

    Ok(())
}
