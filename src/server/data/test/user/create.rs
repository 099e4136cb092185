use super::*;

/// Expected: Ok with the user stored and found again by email
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "diner@example.com".to_string(),
            password_hash: "hash".to_string(),
            nickname: "Diner".to_string(),
            phone: "010-2222-3333".to_string(),
        })
        .await?;

    assert_eq!(user.nickname, "Diner");
    assert!(repo.email_exists("diner@example.com").await?);

    let found = repo.find_by_email("diner@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}
