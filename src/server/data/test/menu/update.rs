use super::*;

/// Expected: Ok with price changed and the other fields untouched
#[tokio::test]
async fn updates_price_only() -> Result<(), DbErr> {
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

    let updated = repo
        .update(UpdateMenuParam {
            id: menu.id,
            price: Some(9500),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.price, 9500);
    assert_eq!(updated.name, "Burger");
    assert_eq!(updated.description, menu.description);

    Ok(())
}

/// Expected: description and image are set when provided
#[tokio::test]
async fn sets_description_and_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_menu_tree(db).await?;

    let repo = MenuRepository::new(db);
    let updated = repo
        .update(UpdateMenuParam {
            id: tree.menu.id,
            description: Some("Now with fries".to_string()),
            image: Some("https://cdn.example.com/burger.png".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.description.as_deref(), Some("Now with fries"));
    assert_eq!(
        updated.image.as_deref(),
        Some("https://cdn.example.com/burger.png")
    );

    Ok(())
}
