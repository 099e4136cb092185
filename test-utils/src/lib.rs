//! Restaurant Order Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! restaurant ordering backend. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases and customizable table schemas, plus
//! factories for every entity.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_menu_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let restaurant = factory::create_restaurant(db).await?;
//!     let category = factory::create_menu_category(db, restaurant.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
