//! In-memory user directory.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use userdir_core::clock::{Clock, SystemClock};
use userdir_core::paging::{self, Page};
use userdir_core::types::DbId;

use crate::models::user::{NewUser, User, UserSearchParams};
use crate::seed;

/// Collection plus the "last created" pointer, guarded together so that
/// `create` updates both atomically.
#[derive(Debug, Default)]
struct DirectoryState {
    /// Most recently created first, then insertion order.
    users: Vec<User>,
    last_created: Option<User>,
}

/// Owns the user collection and implements listing and CRUD over it.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across request handlers. Every operation runs to completion under
/// a single guard, so id allocation in [`create`](Self::create) cannot race.
pub struct UserDirectory {
    state: RwLock<DirectoryState>,
    clock: Arc<dyn Clock>,
}

impl UserDirectory {
    /// Create an empty directory stamped by the system clock.
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a directory preloaded with [`seed::sample_users`].
    pub fn with_sample_users() -> Self {
        Self::with_users(seed::sample_users())
    }

    /// Create a directory holding `users` in the given order.
    ///
    /// The caller must supply unique ids.
    pub fn with_users(users: Vec<User>) -> Self {
        Self::with_clock(users, Arc::new(SystemClock))
    }

    /// Create a directory with an explicit timestamp source.
    pub fn with_clock(users: Vec<User>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(DirectoryState {
                users,
                last_created: None,
            }),
            clock,
        }
    }

    // A panic can only happen after the collection is consistent again,
    // so a poisoned lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, DirectoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DirectoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Filter and paginate the collection.
    ///
    /// Filters are conjunctive. `total` counts matches before slicing; a page
    /// past the end yields empty `records`. Never mutates the directory.
    pub fn list(&self, params: Option<&UserSearchParams>) -> Page<User> {
        // Snapshot under the read guard; filtering runs after it is released.
        let snapshot = self.read().users.clone();
        let matched: Vec<User> = match params {
            Some(p) => snapshot.into_iter().filter(|u| p.matches(u)).collect(),
            None => snapshot,
        };

        let (current, size) = params.map_or((None, None), |p| (p.current, p.size));
        let page = paging::paginate(matched, current, size);

        tracing::debug!(
            total = page.total,
            current = page.current,
            size = page.size,
            returned = page.records.len(),
            "Listed users"
        );
        page
    }

    /// Find a user by id. Returns `None` when no record has that id.
    pub fn get_by_id(&self, id: DbId) -> Option<User> {
        self.read().users.iter().find(|u| u.id == id).cloned()
    }

    /// Insert a new user at the front of the collection.
    ///
    /// The id is `max(existing) + 1` (or `1` when empty) and `createTime` is
    /// stamped from the clock, overriding any caller value. The record also
    /// becomes [`last_created`](Self::last_created).
    pub fn create(&self, input: NewUser) -> User {
        let mut state = self.write();

        let id = state.users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        let mut user = input.into_user(id);
        user.create_time = self.clock.now();

        state.users.insert(0, user.clone());
        state.last_created = Some(user.clone());
        drop(state);

        tracing::info!(id, user_name = %user.user_name, "User created");
        user
    }

    /// Replace the stored record whose id matches `user.id`.
    ///
    /// The stored `id` and `createTime` are kept; `updateTime` is stamped
    /// from the clock. Returns `None` without touching the collection when
    /// no record has that id.
    pub fn update(&self, user: User) -> Option<User> {
        let mut state = self.write();

        let Some(stored) = state.users.iter_mut().find(|u| u.id == user.id) else {
            tracing::debug!(id = user.id, "Update skipped, user not found");
            return None;
        };

        let id = stored.id;
        let create_time = std::mem::take(&mut stored.create_time);
        *stored = User {
            id,
            create_time,
            update_time: self.clock.now(),
            ..user
        };
        let updated = stored.clone();
        drop(state);

        tracing::info!(id, "User updated");
        Some(updated)
    }

    /// Remove the record with `id`. Returns whether anything was removed.
    pub fn delete(&self, id: DbId) -> bool {
        let mut state = self.write();
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        let removed = state.users.len() != before;
        drop(state);

        if removed {
            tracing::info!(id, "User deleted");
        } else {
            tracing::debug!(id, "Delete was a no-op, user not found");
        }
        removed
    }

    /// The record produced by the most recent [`create`](Self::create), if any.
    ///
    /// Not cleared by later updates or deletes.
    pub fn last_created(&self) -> Option<User> {
        self.read().last_created.clone()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
