use super::*;

/// Tests recording a successful mutation.
///
/// Verifies that the row lands in the clinic's trail with the acting
/// user's name joined in.
///
/// Expected: Ok with every field preserved
#[tokio::test]
async fn records_successful_mutation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let user = factory::create_user(db).await?;

    let repo = SecurityLogRepository::new(db);
    let result = repo
        .insert(RecordSecurityLogParam {
            clinic_id: Some(clinic.id),
            user_id: Some(user.id),
            action: "create".to_string(),
            entity: "appointment".to_string(),
            entity_id: Some(42),
            success: true,
            detail: None,
        })
        .await;

    assert!(result.is_ok());

    let (logs, total) = repo
        .get_paginated(GetSecurityLogsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(logs.len(), 1);
    let log = &logs[0];
    assert_eq!(log.clinic_id, Some(clinic.id));
    assert_eq!(log.user_id, Some(user.id));
    assert_eq!(log.user_name, Some(user.name));
    assert_eq!(log.action, "create");
    assert_eq!(log.entity, "appointment");
    assert_eq!(log.entity_id, Some(42));
    assert!(log.success);
    assert!(log.detail.is_none());

    Ok(())
}

/// Tests recording a rejected mutation.
///
/// Expected: Ok with the failure and its reason preserved
#[tokio::test]
async fn records_failed_attempt_with_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let user = factory::create_user(db).await?;

    let repo = SecurityLogRepository::new(db);
    repo.insert(RecordSecurityLogParam {
        clinic_id: Some(clinic.id),
        user_id: Some(user.id),
        action: "create".to_string(),
        entity: "appointment".to_string(),
        entity_id: None,
        success: false,
        detail: Some("appointment overlaps an existing booking".to_string()),
    })
    .await?;

    let (logs, _) = repo
        .get_paginated(GetSecurityLogsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(logs.len(), 1);
    assert!(!logs[0].success);
    assert_eq!(
        logs[0].detail.as_deref(),
        Some("appointment overlaps an existing booking")
    );
    assert!(logs[0].entity_id.is_none());

    Ok(())
}

/// Tests recording a platform-level action with no clinic.
///
/// Expected: Ok, and the row stays out of clinic trails
#[tokio::test]
async fn keeps_platform_rows_out_of_clinic_trails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = SecurityLogRepository::new(db);
    repo.insert(RecordSecurityLogParam {
        clinic_id: None,
        user_id: None,
        action: "login".to_string(),
        entity: "user".to_string(),
        entity_id: None,
        success: false,
        detail: Some("invalid credentials".to_string()),
    })
    .await?;

    let (logs, total) = repo
        .get_paginated(GetSecurityLogsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 0);
    assert!(logs.is_empty());

    Ok(())
}
