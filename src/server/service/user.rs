//! User account service.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{order::OrderRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, SignUpUserParam, User},
    service::token::{AccountKind, TokenPair, TokenService, TokenType},
    util::password::{hash_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(())` - Email is free
    /// - `Err(AppError::Conflict)` - Email is already registered
    pub async fn check_email(&self, email: &str) -> Result<(), AppError> {
        if UserRepository::new(self.db).email_exists(email).await? {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                email
            )));
        }

        Ok(())
    }

    pub async fn sign_up(&self, param: SignUpUserParam) -> Result<User, AppError> {
        self.check_email(&param.email).await?;

        let password_hash = hash_password(&param.password).await?;
        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                email: param.email,
                password_hash,
                nickname: param.nickname,
                phone: param.phone,
            })
            .await
            .map_err(AppError::conflict_on_unique("Email is already registered"))?;

        tracing::info!("User {} signed up", user.id);

        Ok(user)
    }

    /// Verifies credentials and issues an access/refresh token pair.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Credentials are valid
    /// - `Err(AuthError::UnknownEmail)` - No user with this email (404)
    /// - `Err(AuthError::PasswordMismatch)` - Wrong password (401)
    pub async fn sign_in(
        &self,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::UnknownEmail(email.to_string()).into());
        };

        if !verify_password(password, &user.password_hash).await? {
            return Err(AuthError::PasswordMismatch(email.to_string()).into());
        }

        tokens.issue_pair(AccountKind::User, &user.email)
    }

    pub fn refresh(&self, tokens: &TokenService, user: &User) -> Result<String, AppError> {
        tokens.issue(AccountKind::User, TokenType::Access, &user.email)
    }

    /// Removes a user account. The user's orders stay with `user_id` cleared.
    pub async fn leave(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        OrderRepository::new(&txn).detach_user(user_id).await?;
        UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        tracing::info!("User {} left", user_id);

        Ok(())
    }
}
