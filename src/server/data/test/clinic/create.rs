use super::*;

/// Tests creating a new clinic.
///
/// Verifies that the repository creates the clinic with the given name and
/// that it can be read back by ID.
///
/// Expected: Ok with the clinic created
#[tokio::test]
async fn creates_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClinicRepository::new(db);
    let result = repo
        .create(CreateClinicParam {
            name: "Vida Clinic".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let clinic = result.unwrap();
    assert_eq!(clinic.name, "Vida Clinic");

    let fetched = repo.get_by_id(clinic.id).await?;
    assert_eq!(fetched.map(|c| c.id), Some(clinic.id));

    Ok(())
}
