//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these types so that entity
//! models never leak into service or controller layers. Controllers convert
//! request DTOs into `*Param` types and domain models back into DTOs.

pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;
