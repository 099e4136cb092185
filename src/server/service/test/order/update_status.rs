use super::*;

/// Expected: Ok(Order) moving from `not_payment` to `paid` to `done`
#[tokio::test]
async fn moves_through_statuses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.id, restaurant.id).await?;

    let service = OrderService::new(db);
    let paid = service
        .update_status(restaurant.id, order.id, OrderStatus::Paid)
        .await?;
    let done = service
        .update_status(restaurant.id, order.id, OrderStatus::Done)
        .await?;

    assert_eq!(paid.status, OrderStatus::Paid);
    assert_eq!(done.status, OrderStatus::Done);
    assert_eq!(
        service.get_for_user(user.id, order.id).await?.status,
        OrderStatus::Done
    );

    Ok(())
}

/// Tests terminal and unchanged statuses are refused.
///
/// Expected: Err(AppError::Conflict) for both
#[tokio::test]
async fn refuses_terminal_and_same_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let user = factory::create_user(db).await?;
    let pending = factory::create_order(db, user.id, restaurant.id).await?;
    let cancelled = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .status(entity::sea_orm_active_enums::OrderStatus::Cancelled)
        .build()
        .await?;

    let service = OrderService::new(db);

    assert!(matches!(
        service
            .update_status(restaurant.id, pending.id, OrderStatus::NotPayment)
            .await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service
            .update_status(restaurant.id, cancelled.id, OrderStatus::Paid)
            .await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Expected: Err(AppError::NotFound) when another restaurant changes the order
#[tokio::test]
async fn hides_foreign_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let intruder = factory::create_restaurant(db).await?;
    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.id, restaurant.id).await?;

    let result = OrderService::new(db)
        .update_status(intruder.id, order.id, OrderStatus::Cancelled)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
