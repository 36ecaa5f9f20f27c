use std::sync::Arc;

use userdir_db::repositories::UserDirectory;

use crate::delay::ResponseDelay;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The user collection. Each state owns its own instance.
    pub directory: Arc<UserDirectory>,
    /// Latency applied before list responses.
    pub list_delay: Arc<dyn ResponseDelay>,
}
