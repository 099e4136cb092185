use super::*;
use crate::server::data::menu_option::MenuOptionRepository;

/// Tests removing a group after its options are gone.
///
/// Expected: Ok with the group and its options deleted
#[tokio::test]
async fn deletes_group_after_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tree = factory::helpers::create_menu_tree(db).await?;
    factory::create_menu_option(db, tree.group.id).await?;

    let option_repo = MenuOptionRepository::new(db);
    let group_repo = OptionGroupRepository::new(db);

    let options_deleted = option_repo.delete_by_groups(&[tree.group.id]).await?;
    let groups_deleted = group_repo.delete_many(&[tree.group.id]).await?;

    assert_eq!(options_deleted, 2);
    assert_eq!(groups_deleted, 1);
    assert!(group_repo.find_by_id(tree.group.id).await?.is_none());
    assert!(option_repo.find_by_id(tree.option.id).await?.is_none());

    Ok(())
}
