use super::*;
use crate::server::data::order::OrderRepository;

/// Tests deleting a user after detaching their orders.
///
/// Expected: Ok with the user gone and the order kept with a NULL user
#[tokio::test]
async fn deletes_user_and_keeps_detached_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::create_order(db, user.id, restaurant.id).await?;

    let detached = OrderRepository::new(db).detach_user(user.id).await?;
    UserRepository::new(db).delete(user.id).await?;

    assert_eq!(detached, 1);
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_none());

    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_id, None);
    assert_eq!(stored.restaurant_id, Some(restaurant.id));

    Ok(())
}
