use super::*;

/// Tests creating a new insurance plan.
///
/// Expected: Ok with the plan created under the clinic
#[tokio::test]
async fn creates_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = HealthInsurancePlanRepository::new(db);
    let result = repo
        .create(CreateHealthInsurancePlanParam {
            clinic_id: clinic.id,
            name: "MediSaude Gold".to_string(),
            base_price_cents: 18_000,
        })
        .await;

    assert!(result.is_ok());
    let plan = result.unwrap();
    assert_eq!(plan.clinic_id, clinic.id);
    assert_eq!(plan.name, "MediSaude Gold");
    assert_eq!(plan.base_price_cents, 18_000);

    Ok(())
}
