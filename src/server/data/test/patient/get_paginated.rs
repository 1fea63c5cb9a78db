use super::*;

/// Tests listing patients sorted by name.
///
/// Expected: Ok with patients in alphabetical order
#[tokio::test]
async fn sorts_patients_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    factory::patient::PatientFactory::new(db, clinic.id)
        .name("Wanda Reis")
        .build()
        .await?;
    factory::patient::PatientFactory::new(db, clinic.id)
        .name("Bruno Alves")
        .build()
        .await?;

    let repo = PatientRepository::new(db);
    let result = repo
        .get_paginated(GetPatientsParam {
            clinic_id: clinic.id,
            search: None,
            page: 0,
            per_page: 10,
        })
        .await;

    assert!(result.is_ok());
    let (patients, total) = result.unwrap();
    assert_eq!(total, 2);
    assert_eq!(patients[0].name, "Bruno Alves");
    assert_eq!(patients[1].name, "Wanda Reis");

    Ok(())
}

/// Tests filtering patients by a name search.
///
/// Verifies that only patients whose name contains the search string are
/// returned and that the match ignores ASCII case.
///
/// Expected: Ok with only the matching patients
#[tokio::test]
async fn filters_by_name_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    factory::patient::PatientFactory::new(db, clinic.id)
        .name("Maria Souza")
        .build()
        .await?;
    factory::patient::PatientFactory::new(db, clinic.id)
        .name("Marina Costa")
        .build()
        .await?;
    factory::patient::PatientFactory::new(db, clinic.id)
        .name("Bruno Alves")
        .build()
        .await?;

    let repo = PatientRepository::new(db);
    let (patients, total) = repo
        .get_paginated(GetPatientsParam {
            clinic_id: clinic.id,
            search: Some("mari".to_string()),
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(patients[0].name, "Maria Souza");
    assert_eq!(patients[1].name, "Marina Costa");

    Ok(())
}

/// Tests that patient listings stay scoped to their clinic.
///
/// Expected: Ok with the other clinic's patients excluded
#[tokio::test]
async fn scopes_patients_to_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let mine = factory::create_patient(db, clinic.id).await?;
    factory::create_patient(db, other.id).await?;

    let repo = PatientRepository::new(db);
    let (patients, total) = repo
        .get_paginated(GetPatientsParam {
            clinic_id: clinic.id,
            search: None,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(patients[0].id, mine.id);

    Ok(())
}

/// Tests pagination of the patient listing.
///
/// Expected: Ok with non-overlapping pages and a stable total
#[tokio::test]
async fn paginates_patients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    for _ in 0..5 {
        factory::create_patient(db, clinic.id).await?;
    }

    let repo = PatientRepository::new(db);

    let (page1, total) = repo
        .get_paginated(GetPatientsParam {
            clinic_id: clinic.id,
            search: None,
            page: 0,
            per_page: 2,
        })
        .await?;
    assert_eq!(page1.len(), 2);
    assert_eq!(total, 5);

    let (page3, _) = repo
        .get_paginated(GetPatientsParam {
            clinic_id: clinic.id,
            search: None,
            page: 2,
            per_page: 2,
        })
        .await?;
    assert_eq!(page3.len(), 1);

    Ok(())
}
