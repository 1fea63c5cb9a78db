use super::*;

/// Tests listing the clinics a user belongs to.
///
/// Verifies that only joined clinics are returned, sorted by name.
///
/// Expected: Ok with the joined clinics in alphabetical order
#[tokio::test]
async fn lists_joined_clinics_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let beta = factory::clinic::ClinicFactory::new(db).name("Beta Clinic").build().await?;
    let alpha = factory::clinic::ClinicFactory::new(db).name("Alpha Clinic").build().await?;
    let skipped = factory::create_clinic(db).await?;
    factory::create_membership(db, user.id, beta.id).await?;
    factory::create_membership(db, user.id, alpha.id).await?;

    let repo = UserClinicRepository::new(db);
    let result = repo.get_clinics_for_user(user.id).await;

    assert!(result.is_ok());
    let clinics = result.unwrap();
    assert_eq!(clinics.len(), 2);
    assert_eq!(clinics[0].name, "Alpha Clinic");
    assert_eq!(clinics[1].name, "Beta Clinic");
    assert!(clinics.iter().all(|c| c.id != skipped.id));

    Ok(())
}

/// Tests listing clinics for a user without any memberships.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_user_without_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_clinic(db).await?;

    let repo = UserClinicRepository::new(db);
    let clinics = repo.get_clinics_for_user(user.id).await?;

    assert!(clinics.is_empty());

    Ok(())
}
