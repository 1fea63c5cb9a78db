use super::*;

/// Tests listing a clinic's plans sorted by name.
///
/// Expected: Ok with plans in alphabetical order
#[tokio::test]
async fn sorts_plans_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    factory::insurance_plan::InsurancePlanFactory::new(db, clinic.id)
        .name("Vida Premium")
        .build()
        .await?;
    factory::insurance_plan::InsurancePlanFactory::new(db, clinic.id)
        .name("Basico")
        .build()
        .await?;

    let repo = HealthInsurancePlanRepository::new(db);
    let result = repo.get_all(clinic.id).await;

    assert!(result.is_ok());
    let plans = result.unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "Basico");
    assert_eq!(plans[1].name, "Vida Premium");

    Ok(())
}

/// Tests that plan listings stay scoped to their clinic.
///
/// Expected: Ok with the other clinic's plans excluded
#[tokio::test]
async fn scopes_plans_to_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let mine = factory::create_insurance_plan(db, clinic.id).await?;
    factory::create_insurance_plan(db, other.id).await?;

    let repo = HealthInsurancePlanRepository::new(db);
    let plans = repo.get_all(clinic.id).await?;

    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, mine.id);

    Ok(())
}
