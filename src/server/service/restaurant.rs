//! Restaurant account service.
//!
//! Handles registration, credentials, profile edits and account removal for
//! restaurants. Removal deletes the whole menu tree in application code and
//! detaches the restaurant's orders inside one transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{order::OrderRepository, restaurant::RestaurantRepository},
    error::{auth::AuthError, AppError},
    model::restaurant::{
        CreateRestaurantParam, PaginatedRestaurants, Restaurant, SignUpRestaurantParam,
        UpdateRestaurantParam,
    },
    service::{
        menu::cascade::MenuTreeCascade,
        token::{AccountKind, TokenPair, TokenService, TokenType},
    },
    util::{
        pagination::total_pages,
        password::{hash_password, verify_password},
    },
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks that no restaurant is registered with the email.
    ///
    /// # Returns
    /// - `Ok(())` - Email is free
    /// - `Err(AppError::Conflict)` - Email is already registered
    pub async fn check_email(&self, email: &str) -> Result<(), AppError> {
        if RestaurantRepository::new(self.db)
            .email_exists(email)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                email
            )));
        }

        Ok(())
    }

    /// Registers a restaurant, hashing the password before storage.
    ///
    /// # Returns
    /// - `Ok(Restaurant)` - The new account
    /// - `Err(AppError::Conflict)` - Email is already registered
    pub async fn sign_up(&self, param: SignUpRestaurantParam) -> Result<Restaurant, AppError> {
        self.check_email(&param.email).await?;

        let password_hash = hash_password(&param.password).await?;
        let restaurant = RestaurantRepository::new(self.db)
            .create(CreateRestaurantParam {
                email: param.email,
                password_hash,
                name: param.name,
                phone: param.phone,
                address: param.address,
                description: param.description,
            })
            .await
            .map_err(AppError::conflict_on_unique("Email is already registered"))?;

        tracing::info!("Restaurant {} signed up", restaurant.id);

        Ok(restaurant)
    }

    /// Verifies credentials and issues an access/refresh token pair.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Credentials are valid
    /// - `Err(AuthError::UnknownEmail)` - No restaurant with this email (404)
    /// - `Err(AuthError::PasswordMismatch)` - Wrong password (401)
    pub async fn sign_in(
        &self,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, AppError> {
        let Some(restaurant) = RestaurantRepository::new(self.db)
            .find_by_email(email)
            .await?
        else {
            return Err(AuthError::UnknownEmail(email.to_string()).into());
        };

        if !verify_password(password, &restaurant.password_hash).await? {
            return Err(AuthError::PasswordMismatch(email.to_string()).into());
        }

        tokens.issue_pair(AccountKind::Restaurant, &restaurant.email)
    }

    /// Issues a new access token for a restaurant already resolved from a refresh token.
    pub fn refresh(
        &self,
        tokens: &TokenService,
        restaurant: &Restaurant,
    ) -> Result<String, AppError> {
        tokens.issue(AccountKind::Restaurant, TokenType::Access, &restaurant.email)
    }

    /// Confirms the password of an authenticated restaurant.
    ///
    /// # Returns
    /// - `Ok(())` - Password matches
    /// - `Err(AuthError::PasswordMismatch)` - Password does not match (401)
    pub async fn check_password(
        &self,
        restaurant: &Restaurant,
        password: &str,
    ) -> Result<(), AppError> {
        if !verify_password(password, &restaurant.password_hash).await? {
            return Err(AuthError::PasswordMismatch(restaurant.email.clone()).into());
        }

        Ok(())
    }

    pub async fn edit_password(&self, restaurant_id: i32, password: &str) -> Result<(), AppError> {
        let password_hash = hash_password(password).await?;
        RestaurantRepository::new(self.db)
            .update(UpdateRestaurantParam::password_hash(
                restaurant_id,
                password_hash,
            ))
            .await?;

        tracing::info!("Restaurant {} changed password", restaurant_id);

        Ok(())
    }

    /// Applies a partial profile or address update.
    pub async fn edit(&self, param: UpdateRestaurantParam) -> Result<Restaurant, AppError> {
        let restaurant = RestaurantRepository::new(self.db).update(param).await?;

        Ok(restaurant)
    }

    /// Gets a page of the restaurant directory.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedRestaurants, AppError> {
        let (restaurants, total) = RestaurantRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedRestaurants {
            restaurants,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Removes a restaurant account.
    ///
    /// Deletes categories, menus, groups and options bottom-up, clears the
    /// restaurant reference on its orders, then deletes the restaurant. Runs
    /// in a single transaction; on failure nothing is removed.
    pub async fn leave(&self, restaurant_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        MenuTreeCascade::new(&txn)
            .remove_restaurant_menu(restaurant_id)
            .await?;
        OrderRepository::new(&txn)
            .detach_restaurant(restaurant_id)
            .await?;
        RestaurantRepository::new(&txn).delete(restaurant_id).await?;

        txn.commit().await?;

        tracing::info!("Restaurant {} left", restaurant_id);

        Ok(())
    }
}
