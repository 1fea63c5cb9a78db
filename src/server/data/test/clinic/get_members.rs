use super::*;

/// Tests listing clinic members with their account details.
///
/// Verifies that every member is returned with name and email, sorted
/// alphabetically by name.
///
/// Expected: Ok with members sorted by name
#[tokio::test]
async fn lists_members_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let zilda = factory::user::UserFactory::new(db).name("Zilda").build().await?;
    let alice = factory::user::UserFactory::new(db).name("Alice").build().await?;
    factory::create_membership(db, zilda.id, clinic.id).await?;
    factory::create_membership(db, alice.id, clinic.id).await?;

    let repo = UserClinicRepository::new(db);
    let result = repo.get_members(clinic.id).await;

    assert!(result.is_ok());
    let members = result.unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Alice");
    assert_eq!(members[0].email, alice.email);
    assert_eq!(members[1].name, "Zilda");

    Ok(())
}

/// Tests listing members of a clinic nobody joined.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_clinic_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = UserClinicRepository::new(db);
    let members = repo.get_members(clinic.id).await?;

    assert!(members.is_empty());

    Ok(())
}

/// Tests that member listings stay scoped to their clinic.
///
/// Verifies that members of one clinic never appear in another clinic's
/// listing.
///
/// Expected: Ok with only the requested clinic's members
#[tokio::test]
async fn scopes_members_to_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic_a = factory::create_clinic(db).await?;
    let clinic_b = factory::create_clinic(db).await?;
    let member_a = factory::create_user(db).await?;
    let member_b = factory::create_user(db).await?;
    factory::create_membership(db, member_a.id, clinic_a.id).await?;
    factory::create_membership(db, member_b.id, clinic_b.id).await?;

    let repo = UserClinicRepository::new(db);
    let members = repo.get_members(clinic_a.id).await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, member_a.id);

    Ok(())
}
