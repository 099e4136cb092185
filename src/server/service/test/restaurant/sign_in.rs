use super::*;

/// Tests signing in with correct credentials issues a usable token pair.
///
/// Expected: Ok(TokenPair) whose tokens validate for their purpose
#[tokio::test]
async fn issues_token_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("service-test-secret", 3600, 7200);

    let service = RestaurantService::new(db);
    service
        .sign_up(sign_up_param("bistro@example.com", "s3cret-pass"))
        .await?;
    let pair = service
        .sign_in(&tokens, "bistro@example.com", "s3cret-pass")
        .await?;

    let access = tokens
        .validate(&pair.access_token, AccountKind::Restaurant, TokenType::Access)
        .unwrap();
    let refresh = tokens
        .validate(
            &pair.refresh_token,
            AccountKind::Restaurant,
            TokenType::Refresh,
        )
        .unwrap();
    assert_eq!(access.sub, "bistro@example.com");
    assert_eq!(refresh.sub, "bistro@example.com");

    Ok(())
}

/// Expected: Err(AuthError::UnknownEmail)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("service-test-secret", 3600, 7200);

    let result = RestaurantService::new(db)
        .sign_in(&tokens, "nobody@example.com", "whatever")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownEmail(_)))
    ));

    Ok(())
}

/// Tests wrong passwords are refused at sign in and at the password check.
///
/// Expected: Err(AuthError::PasswordMismatch) in both places
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("service-test-secret", 3600, 7200);

    let service = RestaurantService::new(db);
    let restaurant = service
        .sign_up(sign_up_param("bistro@example.com", "s3cret-pass"))
        .await?;

    let result = service
        .sign_in(&tokens, "bistro@example.com", "wrong-pass")
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PasswordMismatch(_)))
    ));

    assert!(service
        .check_password(&restaurant, "s3cret-pass")
        .await
        .is_ok());
    assert!(matches!(
        service.check_password(&restaurant, "wrong-pass").await,
        Err(AppError::AuthErr(AuthError::PasswordMismatch(_)))
    ));

    Ok(())
}

/// Tests a changed password replaces the old one.
///
/// Expected: sign in succeeds with the new password only
#[tokio::test]
async fn edit_password_replaces_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("service-test-secret", 3600, 7200);

    let service = RestaurantService::new(db);
    let restaurant = service
        .sign_up(sign_up_param("bistro@example.com", "old-password"))
        .await?;
    service
        .edit_password(restaurant.id, "new-password")
        .await?;

    assert!(service
        .sign_in(&tokens, "bistro@example.com", "new-password")
        .await
        .is_ok());
    assert!(service
        .sign_in(&tokens, "bistro@example.com", "old-password")
        .await
        .is_err());

    Ok(())
}
