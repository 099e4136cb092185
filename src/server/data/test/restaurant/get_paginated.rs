use super::*;

/// Tests paging through restaurants ordered by name.
///
/// Expected: Ok with the requested slice and the overall total
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Delta", "Alpha", "Charlie", "Bravo", "Echo"] {
        factory::restaurant::RestaurantFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = RestaurantRepository::new(db);
    let (first, total) = repo.get_paginated(0, 2).await?;
    let (last, _) = repo.get_paginated(2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(
        first.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["Alpha", "Bravo"]
    );
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].name, "Echo");

    Ok(())
}

/// Expected: Ok with no restaurants and zero total
#[tokio::test]
async fn returns_empty_page_without_restaurants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    let (restaurants, total) = repo.get_paginated(0, 10).await?;

    assert!(restaurants.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
