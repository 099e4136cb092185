use super::*;

/// Expected: Ok(User) for the token subject
#[tokio::test]
async fn resolves_user_from_bearer_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let tokens = tokens();
    let pair = tokens.issue_pair(AccountKind::User, &user.email).unwrap();
    let headers = headers(Some(&format!("Bearer {}", pair.access_token)), None);

    let resolved = AuthGuard::new(db, &tokens, &headers).user().await.unwrap();

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests a restaurant token cannot be used on user routes.
///
/// Expected: Err(AuthError::TokenKindMismatch)
#[tokio::test]
async fn rejects_restaurant_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;

    let tokens = tokens();
    let pair = tokens
        .issue_pair(AccountKind::Restaurant, &restaurant.email)
        .unwrap();
    let headers = headers(Some(&pair.access_token), None);

    let err = assert_auth_err(AuthGuard::new(db, &tokens, &headers).user().await);

    assert!(matches!(err, AuthError::TokenKindMismatch { .. }));

    Ok(())
}

/// Expected: Err(AuthError::MissingToken) when only the access header is set
#[tokio::test]
async fn refresh_requires_refresh_header() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let tokens = tokens();
    let pair = tokens.issue_pair(AccountKind::User, &user.email).unwrap();
    let headers = headers(Some(&pair.refresh_token), None);

    let err = assert_auth_err(AuthGuard::new(db, &tokens, &headers).user_refresh().await);

    assert!(matches!(err, AuthError::MissingToken(_)));

    Ok(())
}
