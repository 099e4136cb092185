use super::*;

fn burger(menu_category_id: i32) -> CreateMenuParam {
    CreateMenuParam {
        menu_category_id,
        name: "Burger".to_string(),
        price: 8000,
        description: Some("Beef patty".to_string()),
        image: None,
        groups: vec![
            NewGroup {
                name: "Size".to_string(),
                max_count: 1,
                options: vec![option("Regular", 0), option("Large", 1500)],
            },
            NewGroup {
                name: "Toppings".to_string(),
                max_count: 3,
                options: vec![option("Cheese", 500)],
            },
        ],
    }
}

/// Tests a menu is created with its nested groups and options in one call.
///
/// Expected: Ok(MenuWithGroups) that reads back identically through `get`
#[tokio::test]
async fn upload_creates_nested_tree() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, restaurant.id).await?;

    let service = MenuService::new(db);
    let created = service.upload(restaurant.id, burger(category.id)).await?;

    assert_eq!(created.menu.name, "Burger");
    assert_eq!(created.groups.len(), 2);
    assert_eq!(created.groups[0].group.name, "Size");
    assert_eq!(created.groups[0].options.len(), 2);
    assert_eq!(created.groups[1].options[0].name, "Cheese");

    let loaded = service.get(restaurant.id, created.menu.id).await?;
    assert_eq!(loaded, created);

    Ok(())
}

/// Tests the nested upload is rolled back when the menu name is taken.
///
/// Expected: Err(AppError::Conflict) and no second menu in the category
#[tokio::test]
async fn upload_rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, restaurant.id).await?;

    let service = MenuService::new(db);
    service.upload(restaurant.id, burger(category.id)).await?;
    let result = service.upload(restaurant.id, burger(category.id)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.list(restaurant.id, category.id).await?.len(), 1);

    Ok(())
}

/// Expected: Err(AppError::Conflict) for two groups with the same name in one request
#[tokio::test]
async fn upload_rejects_repeated_group_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, restaurant.id).await?;

    let mut param = burger(category.id);
    param.groups[1].name = "Size".to_string();

    let service = MenuService::new(db);
    let result = service.upload(restaurant.id, param).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.list(restaurant.id, category.id).await?.is_empty());

    Ok(())
}

/// Tests two options with the same name inside one nested group.
///
/// Expected: Err(AppError::Conflict) and nothing created in the category
#[tokio::test]
async fn upload_rejects_repeated_option_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, restaurant.id).await?;

    let mut param = burger(category.id);
    param.groups[0].options = vec![option("Large", 1500), option("Large", 2000)];

    let service = MenuService::new(db);
    let result = service.upload(restaurant.id, param).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.list(restaurant.id, category.id).await?.is_empty());

    Ok(())
}

/// Expected: Err(AppError::NotFound) when uploading into another restaurant's category
#[tokio::test]
async fn upload_requires_owned_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_restaurant(db).await?;
    let intruder = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, owner.id).await?;

    let result = MenuService::new(db)
        .upload(intruder.id, burger(category.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a partial edit keeps the columns that were not sent.
///
/// Expected: Ok(MenuWithGroups) with the new price and the old name
#[tokio::test]
async fn edit_updates_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, restaurant.id).await?;

    let service = MenuService::new(db);
    let created = service.upload(restaurant.id, burger(category.id)).await?;
    let edited = service
        .edit(
            restaurant.id,
            UpdateMenuParam {
                id: created.menu.id,
                price: Some(9000),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(edited.menu.name, "Burger");
    assert_eq!(edited.menu.price, 9000);
    assert_eq!(edited.menu.description.as_deref(), Some("Beef patty"));
    assert_eq!(edited.groups.len(), 2);

    Ok(())
}

/// Tests removing a menu deletes its groups and options but not its siblings.
///
/// Expected: Ok with the sibling menu and its subtree intact
#[tokio::test]
async fn remove_cascades_to_groups_and_options() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tree = factory::helpers::create_menu_tree(db).await?;
    let sibling = factory::create_menu(db, tree.category.id).await?;

    let service = MenuService::new(db);
    service.remove(tree.restaurant.id, &[tree.menu.id]).await?;

    assert!(OptionGroupRepository::new(db)
        .find_by_id(tree.group.id)
        .await?
        .is_none());
    assert!(MenuOptionRepository::new(db)
        .find_by_id(tree.option.id)
        .await?
        .is_none());
    let remaining = service.list(tree.restaurant.id, tree.category.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].menu.id, sibling.id);

    Ok(())
}

/// Expected: Ok for any existing category, Err(AppError::NotFound) otherwise
#[tokio::test]
async fn list_for_user_requires_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tree = factory::helpers::create_menu_tree(db).await?;

    let service = MenuService::new(db);
    let menus = service.list_for_user(tree.category.id).await?;

    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].groups[0].options[0].id, tree.option.id);
    assert!(matches!(
        service.list_for_user(tree.category.id + 1000).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
