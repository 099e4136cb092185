//! Request and response DTOs exchanged over the HTTP API.
//!
//! These types define the JSON wire format. Request DTOs carry `validator`
//! rules which controllers check before handing the payload to a service;
//! response DTOs are produced from server-side domain models via `into_dto`.

pub mod api;
pub mod auth;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;
