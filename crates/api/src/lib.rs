//! Mall API
//!
//! Axum-based API with routes and middleware for the mall catalog service.

pub mod handlers;
pub mod router;
pub mod security;
pub mod state;

pub use router::{create_router, create_router_with_origins};
pub use state::AppState;

#[cfg(feature = "openapi")]
pub mod openapi;
