use super::*;

/// Tests a partial update touching only some columns.
///
/// Expected: Ok with the given fields changed and the rest untouched
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    let created = repo.create(create_param("owner@bistro.test")).await?;

    let updated = repo
        .update(UpdateRestaurantParam {
            id: created.id,
            name: Some("Bistro Deluxe".to_string()),
            address: Some("2 High Street".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.name, "Bistro Deluxe");
    assert_eq!(updated.address, "2 High Street");
    assert_eq!(updated.phone, created.phone);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.password_hash, created.password_hash);

    Ok(())
}

/// Expected: Err(RecordNotFound) for an unknown ID
#[tokio::test]
async fn fails_for_unknown_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RestaurantRepository::new(db);
    let result = repo
        .update(UpdateRestaurantParam {
            id: 999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
