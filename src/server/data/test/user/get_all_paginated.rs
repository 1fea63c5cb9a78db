use super::*;

/// Tests listing accounts sorted by name.
///
/// Verifies that the admin user listing returns every account in
/// alphabetical order regardless of registration order.
///
/// Expected: Ok with accounts sorted by name
#[tokio::test]
async fn sorts_accounts_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Zilda").build().await?;
    factory::user::UserFactory::new(db).name("Alice").build().await?;
    factory::user::UserFactory::new(db).name("Marcos").build().await?;

    let repo = UserRepository::new(db);
    let result = repo.get_all_paginated(0, 10).await;

    assert!(result.is_ok());
    let (users, total) = result.unwrap();
    assert_eq!(total, 3);
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].name, "Alice");
    assert_eq!(users[1].name, "Marcos");
    assert_eq!(users[2].name, "Zilda");

    Ok(())
}

/// Tests pagination across multiple pages of accounts.
///
/// Verifies that page boundaries do not overlap and that the total count
/// reflects every account, not just the requested page.
///
/// Expected: Ok with correct pages and a stable total
#[tokio::test]
async fn paginates_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (page1, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(page1.len(), 2);
    assert_eq!(total, 5);

    let (page2, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(page2.len(), 2);

    let (page3, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(page3.len(), 1);

    assert_ne!(page1[0].id, page2[0].id);
    assert_ne!(page2[0].id, page3[0].id);

    Ok(())
}
