//! Database repository layer for all domain entities.
//!
//! Repositories handle CRUD for each table. They use SeaORM entity models
//! internally and return domain models from `server::model` so that entity
//! types stay inside this layer. Every repository is generic over
//! `ConnectionTrait` and can run against either the pooled connection or an
//! open transaction.

pub mod menu;
pub mod menu_category;
pub mod menu_option;
pub mod option_group;
pub mod order;
pub mod restaurant;
pub mod user;

#[cfg(test)]
mod test;
