//! User directory API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! response delay) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod delay;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
