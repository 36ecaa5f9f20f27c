//! Repository layer.
//!
//! Each repository owns its collection in memory and exposes synchronous
//! operations; callers share it behind an `Arc`.

pub mod user_directory;

pub use user_directory::UserDirectory;
