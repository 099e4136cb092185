use super::*;

/// Expected: Ok with only the listed categories removed
#[tokio::test]
async fn deletes_listed_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let first = factory::create_menu_category(db, restaurant.id).await?;
    let second = factory::create_menu_category(db, restaurant.id).await?;
    let kept = factory::create_menu_category(db, restaurant.id).await?;

    let repo = MenuCategoryRepository::new(db);
    let deleted = repo.delete_many(&[first.id, second.id]).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.get_by_restaurant(restaurant.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests that the database refuses to drop a category that still has menus.
///
/// Expected: Err because menus must be removed first
#[tokio::test]
async fn refuses_category_with_menus() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, restaurant.id).await?;
    factory::create_menu(db, category.id).await?;

    let repo = MenuCategoryRepository::new(db);
    let result = repo.delete_many(&[category.id]).await;

    assert!(result.is_err());

    Ok(())
}

/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn ignores_empty_id_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuCategoryRepository::new(db);

    assert_eq!(repo.delete_many(&[]).await?, 0);

    Ok(())
}
