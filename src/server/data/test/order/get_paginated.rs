use super::*;

/// Expected: each side sees only its own orders, newest first
#[tokio::test]
async fn pages_orders_per_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;

    let repo = OrderRepository::new(db);
    let first = repo.create(&snapshot(user.id, restaurant.id)).await?;
    let second = repo.create(&snapshot(user.id, restaurant.id)).await?;
    let third = repo.create(&snapshot(other_user.id, restaurant.id)).await?;

    let (user_orders, user_total) = repo.get_by_user_paginated(user.id, 0, 10).await?;
    let (restaurant_orders, restaurant_total) = repo
        .get_by_restaurant_paginated(restaurant.id, 0, 2)
        .await?;

    assert_eq!(user_total, 2);
    assert_eq!(
        user_orders.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
    assert_eq!(restaurant_total, 3);
    assert_eq!(restaurant_orders.len(), 2);
    assert_eq!(restaurant_orders[0].id, third.id);

    Ok(())
}
