use super::*;

/// Tests a bearer access token resolves the restaurant it was issued for.
///
/// Expected: Ok(Restaurant) with the token subject's email
#[tokio::test]
async fn resolves_restaurant_from_bearer_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::restaurant::RestaurantFactory::new(db)
        .email("owner@example.com")
        .build()
        .await?;

    let tokens = tokens();
    let pair = tokens
        .issue_pair(AccountKind::Restaurant, &restaurant.email)
        .unwrap();
    let headers = headers(Some(&format!("Bearer {}", pair.access_token)), None);

    let resolved = AuthGuard::new(db, &tokens, &headers)
        .restaurant()
        .await
        .unwrap();

    assert_eq!(resolved.id, restaurant.id);
    assert_eq!(resolved.email, "owner@example.com");

    Ok(())
}

/// Expected: Ok(Restaurant) when the header carries the token without prefix
#[tokio::test]
async fn accepts_raw_token_without_prefix() -> Result<(), DbErr> {
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

    let resolved = AuthGuard::new(db, &tokens, &headers)
        .restaurant()
        .await
        .unwrap();

    assert_eq!(resolved.id, restaurant.id);

    Ok(())
}

/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_authorization_header() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let headers = headers(None, None);

    let err = assert_auth_err(AuthGuard::new(db, &tokens, &headers).restaurant().await);

    assert!(matches!(err, AuthError::MissingToken(_)));

    Ok(())
}

/// Tests a user token cannot be used on restaurant routes.
///
/// Expected: Err(AuthError::TokenKindMismatch)
#[tokio::test]
async fn rejects_user_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let tokens = tokens();
    let pair = tokens.issue_pair(AccountKind::User, &user.email).unwrap();
    let headers = headers(Some(&pair.access_token), None);

    let err = assert_auth_err(AuthGuard::new(db, &tokens, &headers).restaurant().await);

    assert!(matches!(err, AuthError::TokenKindMismatch { .. }));

    Ok(())
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;

    let forged = TokenService::new("another-secret", 3600, 7200)
        .issue_pair(AccountKind::Restaurant, &restaurant.email)
        .unwrap();
    let tokens = tokens();
    let headers = headers(Some(&forged.access_token), None);

    let err = assert_auth_err(AuthGuard::new(db, &tokens, &headers).restaurant().await);

    assert!(matches!(err, AuthError::InvalidToken(_)));

    Ok(())
}

/// Tests a token past its expiry is rejected even though the signature matches.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let restaurant = factory::create_restaurant(db).await?;

    let expired = TokenService::new("guard-test-secret", -120, -120)
        .issue_pair(AccountKind::Restaurant, &restaurant.email)
        .unwrap();
    let tokens = tokens();
    let headers = headers(Some(&format!("Bearer {}", expired.access_token)), None);

    let err = assert_auth_err(AuthGuard::new(db, &tokens, &headers).restaurant().await);

    assert!(matches!(err, AuthError::InvalidToken(_)));

    Ok(())
}

/// Tests a valid token whose account has been removed.
///
/// Expected: Err(AuthError::AccountNotInDatabase)
#[tokio::test]
async fn rejects_token_of_removed_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let pair = tokens
        .issue_pair(AccountKind::Restaurant, "gone@example.com")
        .unwrap();
    let headers = headers(Some(&pair.access_token), None);

    let err = assert_auth_err(AuthGuard::new(db, &tokens, &headers).restaurant().await);

    assert!(matches!(err, AuthError::AccountNotInDatabase(email) if email == "gone@example.com"));

    Ok(())
}

/// Tests refresh routes read the refresh header and reject access tokens there.
///
/// Expected: Ok for the refresh token, Err(TokenKindMismatch) for the access token
#[tokio::test]
async fn refresh_requires_refresh_token() -> Result<(), DbErr> {
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

    let valid = headers(None, Some(&pair.refresh_token));
    let resolved = AuthGuard::new(db, &tokens, &valid)
        .restaurant_refresh()
        .await
        .unwrap();
    assert_eq!(resolved.id, restaurant.id);

    let wrong = headers(None, Some(&pair.access_token));
    let err = assert_auth_err(
        AuthGuard::new(db, &tokens, &wrong)
            .restaurant_refresh()
            .await,
    );
    assert!(matches!(err, AuthError::TokenKindMismatch { .. }));

    Ok(())
}
