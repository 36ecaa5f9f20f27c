pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                           list, create
/// /users/options                                   gender/status options (GET)
/// /users/last-created                              last created user (GET)
/// /users/{id}                                      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/users", users::router())
}
