use super::*;

#[tokio::test]
async fn creates_menu_in_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, restaurant.id).await?;

    let repo = MenuRepository::new(db);
    let menu = repo.create(&create_param(category.id, "Burger")).await?;

    assert_eq!(menu.menu_category_id, category.id);
    assert_eq!(menu.name, "Burger");
    assert_eq!(menu.price, 8000);
    assert_eq!(menu.description.as_deref(), Some("House burger"));
    assert!(menu.image.is_none());

    Ok(())
}
