//! In-memory data layer for the user directory.
//!
//! [`repositories::UserDirectory`] owns the user collection and implements
//! the query and mutation operations; [`models`] holds the record and DTO
//! types; [`seed`] provides the sample records loaded at startup.

pub mod models;
pub mod repositories;
pub mod seed;
