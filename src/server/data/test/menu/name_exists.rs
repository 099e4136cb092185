use super::*;

/// Expected: conflicts are scoped to the category and skip the excluded menu
#[tokio::test]
async fn detects_duplicate_name_in_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let mains = factory::create_menu_category(db, restaurant.id).await?;
    let drinks = factory::create_menu_category(db, restaurant.id).await?;
    let burger = factory::menu::MenuFactory::new(db, mains.id)
        .name("Burger")
        .build()
        .await?;

    let repo = MenuRepository::new(db);

    assert!(repo.name_exists(mains.id, "Burger", None).await?);
    assert!(!repo.name_exists(drinks.id, "Burger", None).await?);
    assert!(!repo.name_exists(mains.id, "Burger", Some(burger.id)).await?);

    Ok(())
}
