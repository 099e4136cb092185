use super::*;

/// Expected: Ok with max_count changed and name untouched
#[tokio::test]
async fn updates_max_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_menu_tree(db).await?;

    let repo = OptionGroupRepository::new(db);
    let updated = repo
        .update(UpdateGroupParam {
            id: tree.group.id,
            max_count: Some(3),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.max_count, 3);
    assert_eq!(updated.name, tree.group.name);

    Ok(())
}
