use super::*;

/// Tests creating a restaurant account.
///
/// Expected: Ok with the row stored and the profile fields copied
#[tokio::test]
async fn creates_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    let restaurant = repo.create(create_param("owner@bistro.test")).await?;

    assert_eq!(restaurant.email, "owner@bistro.test");
    assert_eq!(restaurant.name, "Bistro");
    assert_eq!(
        restaurant.description.as_deref(),
        Some("Neighbourhood bistro")
    );

    let stored = entity::prelude::Restaurant::find_by_id(restaurant.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    repo.create(create_param("owner@bistro.test")).await?;
    let result = repo.create(create_param("owner@bistro.test")).await;

    assert!(result.is_err());

    Ok(())
}
