use super::*;

/// Tests storing a snapshot and reading it back.
///
/// Expected: Ok with status not_payment and the detail decoded unchanged
#[tokio::test]
async fn stores_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let snapshot = snapshot(user.id, restaurant.id);

    let repo = OrderRepository::new(db);
    let order = repo.create(&snapshot).await?;

    assert_eq!(order.status, OrderStatus::NotPayment);
    assert_eq!(order.payment_type, PaymentType::Online);
    assert_eq!(order.total_price, 15500);
    assert_eq!(order.discount_amount, 500);
    assert_eq!(order.detail, snapshot.detail);

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored, order);

    Ok(())
}

/// Expected: Err(DbErr::Json) when stored detail does not match the layout
#[tokio::test]
async fn rejects_malformed_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id, restaurant.id)
        .detail(serde_json::json!({ "unexpected": true }), 0)
        .build()
        .await?;

    let result = OrderRepository::new(db).find_by_id(order.id).await;

    assert!(matches!(result, Err(DbErr::Json(_))));

    Ok(())
}
