//! Domain types shared by the user directory crates.
//!
//! This crate has zero internal dependencies so the store, the request
//! adapter and any future tooling can all build on it.

pub mod business;
pub mod clock;
pub mod error;
pub mod paging;
pub mod types;
