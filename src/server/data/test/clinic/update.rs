use super::*;

/// Tests renaming an existing clinic.
///
/// Verifies that the update writes the new name and leaves the clinic ID
/// untouched.
///
/// Expected: Ok with the renamed clinic
#[tokio::test]
async fn renames_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = ClinicRepository::new(db);
    let result = repo
        .update(UpdateClinicParam {
            clinic_id: clinic.id,
            name: "Renamed Clinic".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.as_ref().map(|c| c.id), Some(clinic.id));
    assert_eq!(updated.map(|c| c.name), Some("Renamed Clinic".to_string()));

    Ok(())
}

/// Tests renaming a clinic that does not exist.
///
/// Verifies that the update reports the miss instead of inserting.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClinicRepository::new(db);
    let result = repo
        .update(UpdateClinicParam {
            clinic_id: 999,
            name: "Ghost Clinic".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
