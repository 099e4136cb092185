use super::*;

/// Expected: menus of the category only; IDs collected across categories
#[tokio::test]
async fn returns_menus_of_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let mains = factory::create_menu_category(db, restaurant.id).await?;
    let drinks = factory::create_menu_category(db, restaurant.id).await?;
    let burger = factory::create_menu(db, mains.id).await?;
    let pasta = factory::create_menu(db, mains.id).await?;
    let cola = factory::create_menu(db, drinks.id).await?;

    let repo = MenuRepository::new(db);
    let menus = repo.get_by_category(mains.id).await?;
    let mut ids = repo.get_ids_by_categories(&[mains.id, drinks.id]).await?;
    ids.sort();

    assert_eq!(
        menus.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![burger.id, pasta.id]
    );
    assert_eq!(ids, vec![burger.id, pasta.id, cola.id]);

    Ok(())
}

/// Expected: unknown IDs are skipped by find_by_ids
#[tokio::test]
async fn finds_known_ids_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_menu_tree(db).await?;

    let repo = MenuRepository::new(db);
    let menus = repo.find_by_ids(&[tree.menu.id, 9999]).await?;

    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].id, tree.menu.id);

    Ok(())
}
