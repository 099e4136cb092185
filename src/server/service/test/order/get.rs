use super::*;

/// Tests orders are only visible to the user who placed them and the
/// restaurant that received them.
///
/// Expected: Ok for the two parties, Err(AppError::NotFound) for anyone else
#[tokio::test]
async fn visible_to_both_parties_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let other_restaurant = factory::create_restaurant(db).await?;
    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.id, restaurant.id).await?;

    let service = OrderService::new(db);

    assert_eq!(service.get_for_user(user.id, order.id).await?.id, order.id);
    assert_eq!(
        service
            .get_for_restaurant(restaurant.id, order.id)
            .await?
            .id,
        order.id
    );
    assert!(matches!(
        service.get_for_user(other_user.id, order.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_for_restaurant(other_restaurant.id, order.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_for_user(user.id, order.id + 1000).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Expected: Ok(PaginatedOrders) with page metadata for each side
#[tokio::test]
async fn lists_pages_with_totals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let user = factory::create_user(db).await?;
    for _ in 0..5 {
        factory::create_order(db, user.id, restaurant.id).await?;
    }

    let service = OrderService::new(db);
    let user_page = service.list_for_user(user.id, 1, 2).await?;
    let restaurant_page = service.list_for_restaurant(restaurant.id, 2, 2).await?;

    assert_eq!(user_page.total, 5);
    assert_eq!(user_page.total_pages, 3);
    assert_eq!(user_page.page, 1);
    assert_eq!(user_page.orders.len(), 2);
    assert_eq!(restaurant_page.orders.len(), 1);

    Ok(())
}
