use super::*;

/// Expected: Some for a registered email, None otherwise
#[tokio::test]
async fn finds_restaurant_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::restaurant::RestaurantFactory::new(db)
        .email("known@bistro.test")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let found = repo.find_by_email("known@bistro.test").await?;
    let missing = repo.find_by_email("unknown@bistro.test").await?;

    assert_eq!(found.map(|r| r.id), Some(created.id));
    assert!(missing.is_none());

    Ok(())
}

/// Expected: email_exists reflects registered accounts
#[tokio::test]
async fn reports_email_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .email("taken@bistro.test")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);

    assert!(repo.email_exists("taken@bistro.test").await?);
    assert!(!repo.email_exists("free@bistro.test").await?);

    Ok(())
}
