//! HTTP request handlers.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! validate the request DTO, convert it into a parameter type and hand it to a
//! service. Domain results are converted back into DTOs for the response.

pub mod browse;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;
