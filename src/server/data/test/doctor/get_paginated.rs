use super::*;

/// Tests listing doctors sorted by name.
///
/// Verifies that the page comes back in alphabetical order with each
/// doctor's schedule rows attached.
///
/// Expected: Ok with doctors sorted by name and schedules loaded
#[tokio::test]
async fn sorts_doctors_by_name_with_schedules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let zavier = factory::doctor::DoctorFactory::new(db, clinic.id)
        .name("Dr. Zavier")
        .build()
        .await?;
    factory::doctor::DoctorFactory::new(db, clinic.id)
        .name("Dr. Abreu")
        .build()
        .await?;
    factory::create_business_hour(db, zavier.id, 2, "08:00:00", "12:00:00").await?;

    let repo = DoctorRepository::new(db);
    let result = repo
        .get_paginated(GetDoctorsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 10,
        })
        .await;

    assert!(result.is_ok());
    let (doctors, total) = result.unwrap();
    assert_eq!(total, 2);
    assert_eq!(doctors[0].name, "Dr. Abreu");
    assert!(doctors[0].business_hours.is_empty());
    assert_eq!(doctors[1].name, "Dr. Zavier");
    assert_eq!(doctors[1].business_hours.len(), 1);

    Ok(())
}

/// Tests pagination of the doctor listing.
///
/// Expected: Ok with non-overlapping pages and a stable total
#[tokio::test]
async fn paginates_doctors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    for _ in 0..3 {
        factory::create_doctor(db, clinic.id).await?;
    }

    let repo = DoctorRepository::new(db);

    let (page1, total) = repo
        .get_paginated(GetDoctorsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 2,
        })
        .await?;
    assert_eq!(page1.len(), 2);
    assert_eq!(total, 3);

    let (page2, _) = repo
        .get_paginated(GetDoctorsParam {
            clinic_id: clinic.id,
            page: 1,
            per_page: 2,
        })
        .await?;
    assert_eq!(page2.len(), 1);
    assert_ne!(page1[0].id, page2[0].id);

    Ok(())
}

/// Tests that the listing only covers the requested clinic.
///
/// Expected: Ok with the other clinic's doctors excluded
#[tokio::test]
async fn scopes_doctors_to_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let mine = factory::create_doctor(db, clinic.id).await?;
    factory::create_doctor(db, other.id).await?;

    let repo = DoctorRepository::new(db);
    let (doctors, total) = repo
        .get_paginated(GetDoctorsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, mine.id);

    Ok(())
}
