//! Page-number pagination helpers.
//!
//! Pages are 1-based. A missing or zero `current`/`size` falls back to the
//! defaults below rather than being rejected.

use serde::Serialize;

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    /// Number of matches before slicing.
    pub total: usize,
    pub current: usize,
    pub size: usize,
}

/// Resolve the page number, treating `0` like an absent value.
pub fn resolve_current(current: Option<usize>) -> usize {
    current.filter(|&c| c > 0).unwrap_or(DEFAULT_PAGE)
}

/// Resolve the page size, treating `0` like an absent value.
pub fn resolve_size(size: Option<usize>) -> usize {
    size.filter(|&s| s > 0).unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Slice an already-filtered list into the requested page.
///
/// Offsets past the end produce an empty `records` list; `total` always
/// reflects the full input length.
pub fn paginate<T>(items: Vec<T>, current: Option<usize>, size: Option<usize>) -> Page<T> {
    let current = resolve_current(current);
    let size = resolve_size(size);
    let total = items.len();
    let start = (current - 1).saturating_mul(size);

    let records = items.into_iter().skip(start).take(size).collect();

    Page {
        records,
        total,
        current,
        size,
    }
}
