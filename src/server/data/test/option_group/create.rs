use super::*;

#[tokio::test]
async fn creates_group_for_menu() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_menu_tree(db).await?;

    let repo = OptionGroupRepository::new(db);
    let group = repo.create(tree.menu.id, "Sauce".to_string(), 2).await?;

    assert_eq!(group.menu_id, tree.menu.id);
    assert_eq!(group.max_count, 2);

    let groups = repo.get_by_menu(tree.menu.id).await?;
    assert_eq!(
        groups.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![tree.group.id, group.id]
    );
    assert!(repo.name_exists(tree.menu.id, "Sauce", None).await?);

    Ok(())
}
