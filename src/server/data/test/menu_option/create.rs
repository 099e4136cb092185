use super::*;

#[tokio::test]
async fn creates_option_for_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_menu_tree(db).await?;

    let repo = MenuOptionRepository::new(db);
    let option = repo
        .create(CreateOptionParam {
            option_group_id: tree.group.id,
            name: "Extra cheese".to_string(),
            price: 700,
        })
        .await?;

    assert_eq!(option.option_group_id, tree.group.id);
    assert_eq!(option.price, 700);

    let options = repo.get_by_group(tree.group.id).await?;
    assert_eq!(options.len(), 2);
    assert!(repo.name_exists(tree.group.id, "Extra cheese", None).await?);
    assert!(
        !repo
            .name_exists(tree.group.id, "Extra cheese", Some(option.id))
            .await?
    );

    Ok(())
}
