//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They are responsible for:
//!
//! - **Business Logic**: conflict checks, ownership checks, order pricing
//! - **Orchestration**: coordinating multiple repository calls inside one transaction
//! - **Domain Models**: working with domain models rather than DTOs or entity models
//! - **Cascades**: removing menu trees child-first since the schema never cascades

pub mod menu;
pub mod order;
pub mod restaurant;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
