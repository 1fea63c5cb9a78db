use super::*;

/// Tests deleting a doctor.
///
/// Expected: Ok(true) and the doctor no longer found
#[tokio::test]
async fn deletes_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;

    let repo = DoctorRepository::new(db);
    let deleted = repo.delete(clinic.id, doctor.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(clinic.id, doctor.id).await?.is_none());

    Ok(())
}

/// Tests deleting a doctor through the wrong clinic.
///
/// Verifies that the delete misses and the doctor survives.
///
/// Expected: Ok(false) with the doctor still present
#[tokio::test]
async fn returns_false_for_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let doctor = factory::create_doctor(db, clinic.id).await?;

    let repo = DoctorRepository::new(db);
    let deleted = repo.delete(other.id, doctor.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(clinic.id, doctor.id).await?.is_some());

    Ok(())
}
