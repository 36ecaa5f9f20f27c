//! Handlers for the `/users` resource.
//!
//! Each handler is a thin adapter over [`UserDirectory`] that wraps the
//! synchronous result in the response envelope. Absence on get/update is a
//! 404; deleting an unknown id is a successful `false`.
//!
//! [`UserDirectory`]: userdir_db::repositories::UserDirectory

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use userdir_core::business::{
    EnableStatus, Gender, SelectOption, ENABLE_STATUS_OPTIONS, GENDER_OPTIONS,
};
use userdir_core::error::CoreError;
use userdir_core::paging::Page;
use userdir_core::types::DbId;
use userdir_db::models::user::{NewUser, User, UserSearchParams};
use validator::Validate;

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Display options for the closed enumerations on a user record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOptions {
    pub user_gender: &'static [SelectOption<Gender>],
    pub status: &'static [SelectOption<EnableStatus>],
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users
///
/// Filtered, paginated listing. The configured response delay is awaited
/// after the page is computed.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<UserSearchParams>, QueryRejection>,
) -> AppResult<Json<Envelope<Page<User>>>> {
    let Query(params) = query?;
    let page = state.directory.list(Some(&params));
    state.list_delay.wait().await;
    Ok(Json(Envelope::ok(page)))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Envelope<User>>> {
    let Path(id) = path?;
    let user = state
        .directory
        .get_by_id(id)
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    Ok(Json(Envelope::ok(user)))
}

/// POST /api/v1/users
///
/// Returns the created record (with its assigned id) and 201 Created.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Envelope<User>>)> {
    let Json(input) = payload?;
    input.validate()?;

    let user = state.directory.create(input);
    Ok((StatusCode::CREATED, Json(Envelope::ok(user))))
}

/// PUT /api/v1/users/{id}
///
/// Replaces the record identified by the path. Any id in the body is
/// ignored.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> AppResult<Json<Envelope<User>>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate()?;

    let user = state
        .directory
        .update(input.into_user(id))
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    Ok(Json(Envelope::ok(user)))
}

/// DELETE /api/v1/users/{id}
///
/// `data` is `true` when a record was removed, `false` when none matched.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Envelope<bool>>> {
    let Path(id) = path?;
    Ok(Json(Envelope::ok(state.directory.delete(id))))
}

/// GET /api/v1/users/last-created
///
/// `data` is `null` until a user has been created in this process.
pub async fn last_created(State(state): State<AppState>) -> Json<Envelope<Option<User>>> {
    Json(Envelope::ok(state.directory.last_created()))
}

/// GET /api/v1/users/options
pub async fn options() -> Json<Envelope<UserOptions>> {
    Json(Envelope::ok(UserOptions {
        user_gender: GENDER_OPTIONS,
        status: ENABLE_STATUS_OPTIONS,
    }))
}
