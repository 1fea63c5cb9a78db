use super::*;

/// Tests loading an appointment enriched for display.
///
/// Verifies that patient and doctor names, the doctor's specialty, and the
/// covering plan's name are joined in, and that an appointment without a
/// payment aggregate reads as pending.
///
/// Expected: Ok with names joined and a pending payment status
#[tokio::test]
async fn enriches_with_names_and_default_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let doctor = factory::doctor::DoctorFactory::new(db, clinic.id)
        .name("Dr. Souza")
        .specialty("Cardiology")
        .build()
        .await?;
    let patient = factory::patient::PatientFactory::new(db, clinic.id)
        .name("Maria Souza")
        .build()
        .await?;
    let plan = factory::insurance_plan::InsurancePlanFactory::new(db, clinic.id)
        .name("MediSaude Gold")
        .build()
        .await?;
    let appointment = factory::appointment::AppointmentFactory::new(db, clinic.id, patient.id, doctor.id)
        .health_insurance_plan_id(plan.id)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let result = repo.get_by_id(clinic.id, appointment.id).await;

    assert!(result.is_ok());
    let found = result.unwrap().unwrap();
    assert_eq!(found.id, appointment.id);
    assert_eq!(found.patient_name, "Maria Souza");
    assert_eq!(found.doctor_name, "Dr. Souza");
    assert_eq!(found.doctor_specialty, "Cardiology");
    assert_eq!(
        found.health_insurance_plan_name.as_deref(),
        Some("MediSaude Gold")
    );
    assert_eq!(found.payment_status, PaymentStatus::Pending);

    Ok(())
}

/// Tests that the enriched view reflects the stored payment status.
///
/// Expected: Ok with the settled status read from the aggregate
#[tokio::test]
async fn reads_status_from_payment_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let payment = factory::create_payment(db, clinic.id, appointment.id, 20_000).await?;

    let payments = PaymentRepository::new(db);
    payments
        .update_aggregate(payment.id, 20_000, 20_000, 0, PaymentStatus::Paid)
        .await?;

    let repo = AppointmentRepository::new(db);
    let found = repo.get_by_id(clinic.id, appointment.id).await.unwrap().unwrap();

    assert_eq!(found.payment_status, PaymentStatus::Paid);

    Ok(())
}

/// Tests loading an appointment through the wrong clinic.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo.get_by_id(other.id, appointment.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
