use super::*;

/// Tests deleting an appointment.
///
/// Expected: Ok(true) and the appointment no longer found
#[tokio::test]
async fn deletes_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = AppointmentRepository::new(db);
    let deleted = repo.delete(clinic.id, appointment.id).await?;

    assert!(deleted);
    assert!(repo.get_row_by_id(clinic.id, appointment.id).await?.is_none());

    Ok(())
}

/// Tests deleting an appointment through the wrong clinic.
///
/// Expected: Ok(false) with the appointment still present
#[tokio::test]
async fn returns_false_for_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = AppointmentRepository::new(db);
    let deleted = repo.delete(other.id, appointment.id).await?;

    assert!(!deleted);
    assert!(repo.get_row_by_id(clinic.id, appointment.id).await?.is_some());

    Ok(())
}
