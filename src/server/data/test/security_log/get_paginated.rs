use super::*;

/// Helper function to write an audit row at a fixed instant
async fn create_log_at(
    db: &DatabaseConnection,
    clinic_id: i32,
    action: &str,
    created_at: DateTime<Utc>,
) -> Result<(), DbErr> {
    entity::security_log::ActiveModel {
        id: ActiveValue::NotSet,
        clinic_id: ActiveValue::Set(Some(clinic_id)),
        user_id: ActiveValue::Set(None),
        action: ActiveValue::Set(action.to_string()),
        entity: ActiveValue::Set("appointment".to_string()),
        entity_id: ActiveValue::Set(None),
        success: ActiveValue::Set(true),
        detail: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await?;

    Ok(())
}

/// Tests reading a clinic's trail newest first.
///
/// Expected: Ok with the most recent row at the top
#[tokio::test]
async fn returns_trail_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    create_log_at(db, clinic.id, "create", Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap())
        .await?;
    create_log_at(db, clinic.id, "update", Utc.with_ymd_and_hms(2026, 3, 4, 10, 0, 0).unwrap())
        .await?;
    create_log_at(db, clinic.id, "delete", Utc.with_ymd_and_hms(2026, 3, 4, 11, 0, 0).unwrap())
        .await?;

    let repo = SecurityLogRepository::new(db);
    let result = repo
        .get_paginated(GetSecurityLogsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 10,
        })
        .await;

    assert!(result.is_ok());
    let (logs, total) = result.unwrap();
    assert_eq!(total, 3);

    let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec!["delete", "update", "create"]);

    Ok(())
}

/// Tests that acting user names are joined in where the account exists.
///
/// Verifies that rows pointing at a deleted account keep the user ID with
/// no name, and that system rows carry neither.
///
/// Expected: Ok with names only for live accounts
#[tokio::test]
async fn joins_user_names_where_accounts_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let user = factory::user::UserFactory::new(db).name("Ana Lima").build().await?;

    let repo = SecurityLogRepository::new(db);
    repo.insert(RecordSecurityLogParam {
        clinic_id: Some(clinic.id),
        user_id: Some(user.id),
        action: "update".to_string(),
        entity: "patient".to_string(),
        entity_id: Some(1),
        success: true,
        detail: None,
    })
    .await?;
    repo.insert(RecordSecurityLogParam {
        clinic_id: Some(clinic.id),
        user_id: Some(9999),
        action: "delete".to_string(),
        entity: "patient".to_string(),
        entity_id: Some(1),
        success: true,
        detail: None,
    })
    .await?;
    repo.insert(RecordSecurityLogParam {
        clinic_id: Some(clinic.id),
        user_id: None,
        action: "reminder".to_string(),
        entity: "appointment".to_string(),
        entity_id: Some(1),
        success: true,
        detail: None,
    })
    .await?;

    let (logs, _) = repo
        .get_paginated(GetSecurityLogsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(logs.len(), 3);

    let by_user = logs.iter().find(|l| l.action == "update").unwrap();
    assert_eq!(by_user.user_name.as_deref(), Some("Ana Lima"));

    let by_deleted = logs.iter().find(|l| l.action == "delete").unwrap();
    assert_eq!(by_deleted.user_id, Some(9999));
    assert!(by_deleted.user_name.is_none());

    let by_system = logs.iter().find(|l| l.action == "reminder").unwrap();
    assert!(by_system.user_id.is_none());
    assert!(by_system.user_name.is_none());

    Ok(())
}

/// Tests that a clinic's trail never includes other clinics.
///
/// Expected: Ok with only the requested clinic's rows
#[tokio::test]
async fn scopes_trail_to_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    create_log_at(db, clinic.id, "create", Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap())
        .await?;
    create_log_at(db, other.id, "delete", Utc.with_ymd_and_hms(2026, 3, 4, 10, 0, 0).unwrap())
        .await?;

    let repo = SecurityLogRepository::new(db);
    let (logs, total) = repo
        .get_paginated(GetSecurityLogsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, "create");

    Ok(())
}

/// Tests splitting the trail into pages.
///
/// Expected: Ok with full pages in order and a short last page
#[tokio::test]
async fn paginates_trail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    for hour in 0..5u32 {
        create_log_at(
            db,
            clinic.id,
            &format!("action-{}", 8 + hour),
            Utc.with_ymd_and_hms(2026, 3, 4, 8 + hour, 0, 0).unwrap(),
        )
        .await?;
    }

    let repo = SecurityLogRepository::new(db);
    let (first_page, total) = repo
        .get_paginated(GetSecurityLogsParam {
            clinic_id: clinic.id,
            page: 0,
            per_page: 2,
        })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].action, "action-12");
    assert_eq!(first_page[1].action, "action-11");

    let (last_page, _) = repo
        .get_paginated(GetSecurityLogsParam {
            clinic_id: clinic.id,
            page: 2,
            per_page: 2,
        })
        .await?;

    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].action, "action-8");

    Ok(())
}
