//! Shared response envelope types for API handlers.
//!
//! Every response uses a `{ "data": ..., "error": ... }` envelope. On success
//! `error` is `null`; on failure `data` is `null` and `error` carries a code
//! and message (see [`crate::error::AppError`]).

use serde::Serialize;

/// Standard `{ "data": T, "error": null | {...} }` envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(user)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: T,
    pub error: Option<ErrorBody>,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self { data, error: None }
    }
}

/// Error details carried in a failed envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Machine-readable code, e.g. `NOT_FOUND`.
    pub code: &'static str,
    pub message: String,
}
