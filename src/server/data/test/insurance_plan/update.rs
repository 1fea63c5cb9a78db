use super::*;

/// Tests updating a plan's name and price.
///
/// Expected: Ok with both fields rewritten
#[tokio::test]
async fn updates_name_and_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let plan = factory::create_insurance_plan(db, clinic.id).await?;

    let repo = HealthInsurancePlanRepository::new(db);
    let result = repo
        .update(UpdateHealthInsurancePlanParam {
            clinic_id: clinic.id,
            plan_id: plan.id,
            name: "Renamed Plan".to_string(),
            base_price_cents: 22_000,
        })
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();
    assert_eq!(updated.name, "Renamed Plan");
    assert_eq!(updated.base_price_cents, 22_000);

    Ok(())
}

/// Tests updating a plan through the wrong clinic.
///
/// Expected: Ok with None and the original plan preserved
#[tokio::test]
async fn returns_none_for_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let plan = factory::create_insurance_plan(db, clinic.id).await?;

    let repo = HealthInsurancePlanRepository::new(db);
    let result = repo
        .update(UpdateHealthInsurancePlanParam {
            clinic_id: other.id,
            plan_id: plan.id,
            name: "Hijacked".to_string(),
            base_price_cents: 1,
        })
        .await?;

    assert!(result.is_none());

    let untouched = repo.get_by_id(clinic.id, plan.id).await?.unwrap();
    assert_eq!(untouched.name, plan.name);

    Ok(())
}
