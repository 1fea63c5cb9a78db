use super::*;

/// Tests deleting a plan.
///
/// Expected: Ok(true) and the plan no longer listed
#[tokio::test]
async fn deletes_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let plan = factory::create_insurance_plan(db, clinic.id).await?;

    let repo = HealthInsurancePlanRepository::new(db);
    let deleted = repo.delete(clinic.id, plan.id).await?;

    assert!(deleted);
    assert!(repo.get_all(clinic.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a plan through the wrong clinic.
///
/// Expected: Ok(false) with the plan still present
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
    let plan = factory::create_insurance_plan(db, clinic.id).await?;

    let repo = HealthInsurancePlanRepository::new(db);
    let deleted = repo.delete(other.id, plan.id).await?;

    assert!(!deleted);
    assert!(repo.get_by_id(clinic.id, plan.id).await?.is_some());

    Ok(())
}
