//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct for the stored record
//! - A `Deserialize` create DTO without the server-assigned id
//! - A `Deserialize` search-parameter struct for filtered listing

pub mod user;
