use super::*;

/// Tests leaving removes the whole menu tree in application code.
///
/// Verifies categories, menus, groups and options of the restaurant are
/// deleted while another restaurant's tree is untouched, and that orders
/// survive with the restaurant reference cleared.
///
/// Expected: Ok with only the other restaurant's tree remaining
#[tokio::test]
async fn removes_menu_tree_and_keeps_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leaving = factory::helpers::create_menu_tree(db).await?;
    let second_menu = factory::create_menu(db, leaving.category.id).await?;
    factory::create_option_group(db, second_menu.id).await?;
    let staying = factory::helpers::create_menu_tree(db).await?;
    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, user.id, leaving.restaurant.id).await?;

    RestaurantService::new(db)
        .leave(leaving.restaurant.id)
        .await?;

    assert!(RestaurantRepository::new(db)
        .find_by_id(leaving.restaurant.id)
        .await?
        .is_none());
    assert!(MenuCategoryRepository::new(db)
        .get_by_restaurant(leaving.restaurant.id)
        .await?
        .is_empty());
    assert!(MenuRepository::new(db)
        .find_by_ids(&[leaving.menu.id, second_menu.id])
        .await?
        .is_empty());
    assert!(OptionGroupRepository::new(db)
        .find_by_id(leaving.group.id)
        .await?
        .is_none());
    assert!(MenuOptionRepository::new(db)
        .find_by_id(leaving.option.id)
        .await?
        .is_none());

    assert!(MenuOptionRepository::new(db)
        .find_by_id(staying.option.id)
        .await?
        .is_some());

    let kept = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();
    assert_eq!(kept.restaurant_id, None);
    assert_eq!(kept.user_id, Some(user.id));

    Ok(())
}

/// Expected: Ok for a restaurant without any menu tree
#[tokio::test]
async fn leaves_without_menu() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;

    RestaurantService::new(db).leave(restaurant.id).await?;

    assert!(RestaurantRepository::new(db)
        .find_by_id(restaurant.id)
        .await?
        .is_none());

    Ok(())
}
