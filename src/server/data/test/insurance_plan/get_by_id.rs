use super::*;

/// Tests loading a plan by ID.
///
/// Expected: Ok with the plan
#[tokio::test]
async fn finds_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let plan = factory::create_insurance_plan(db, clinic.id).await?;

    let repo = HealthInsurancePlanRepository::new(db);
    let result = repo.get_by_id(clinic.id, plan.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().map(|p| p.id), Some(plan.id));

    Ok(())
}

/// Tests loading a plan through the wrong clinic.
///
/// Expected: Ok with None
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
    let result = repo.get_by_id(other.id, plan.id).await?;

    assert!(result.is_none());

    Ok(())
}
