use super::*;

/// Expected: Ok with the category linked to its restaurant
#[tokio::test]
async fn creates_category_for_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let repo = MenuCategoryRepository::new(db);
    let category = repo
        .create(CreateMenuCategoryParam {
            restaurant_id: restaurant.id,
            name: "Mains".to_string(),
        })
        .await?;

    assert_eq!(category.restaurant_id, restaurant.id);
    assert_eq!(category.name, "Mains");

    let stored = entity::prelude::MenuCategory::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
