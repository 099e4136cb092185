use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then
/// call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Restaurant, MenuCategory};
///
/// let test = TestBuilder::new()
///     .with_table(Restaurant)
///     .with_table(MenuCategory)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the account tables: Restaurant and User.
    pub fn with_account_tables(self) -> Self {
        self.with_table(Restaurant).with_table(User)
    }

    /// Adds the account tables and the full menu tree:
    /// MenuCategory, Menu, OptionGroup and MenuOption.
    pub fn with_menu_tables(self) -> Self {
        self.with_account_tables()
            .with_table(MenuCategory)
            .with_table(Menu)
            .with_table(OptionGroup)
            .with_table(MenuOption)
    }

    /// Adds every table, including Orders.
    pub fn with_order_tables(self) -> Self {
        self.with_menu_tables().with_table(Order)
    }

    /// Builds the test context with an in-memory SQLite database and the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
