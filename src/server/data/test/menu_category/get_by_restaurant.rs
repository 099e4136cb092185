use super::*;

/// Expected: only the restaurant's own categories, in creation order
#[tokio::test]
async fn returns_categories_of_restaurant_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let other = factory::create_restaurant(db).await?;
    let first = factory::create_menu_category(db, restaurant.id).await?;
    let second = factory::create_menu_category(db, restaurant.id).await?;
    factory::create_menu_category(db, other.id).await?;

    let repo = MenuCategoryRepository::new(db);
    let categories = repo.get_by_restaurant(restaurant.id).await?;
    let ids = repo.get_ids_by_restaurant(restaurant.id).await?;

    assert_eq!(
        categories.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert_eq!(ids.len(), 2);

    Ok(())
}
