use super::*;

/// Tests that name uniqueness is scoped to the restaurant.
///
/// Expected: true within the same restaurant, false for another restaurant
#[tokio::test]
async fn scopes_names_to_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let other = factory::create_restaurant(db).await?;
    factory::menu_category::MenuCategoryFactory::new(db, restaurant.id)
        .name("Drinks")
        .build()
        .await?;

    let repo = MenuCategoryRepository::new(db);

    assert!(repo.name_exists(restaurant.id, "Drinks", None).await?);
    assert!(!repo.name_exists(other.id, "Drinks", None).await?);
    assert!(!repo.name_exists(restaurant.id, "Desserts", None).await?);

    Ok(())
}

/// Expected: the excluded category does not conflict with itself
#[tokio::test]
async fn ignores_excluded_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::menu_category::MenuCategoryFactory::new(db, restaurant.id)
        .name("Drinks")
        .build()
        .await?;

    let repo = MenuCategoryRepository::new(db);

    assert!(
        !repo
            .name_exists(restaurant.id, "Drinks", Some(category.id))
            .await?
    );

    Ok(())
}
