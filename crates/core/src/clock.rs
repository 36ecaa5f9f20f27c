//! Source of the textual audit timestamps stamped on user records.

/// Format used for `createTime` / `updateTime` (e.g. `2024-01-01 12:00:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Produces the current timestamp as an audit string.
///
/// Injected into the directory so tests can pin time without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Wall clock in the server's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Clock that always returns the same timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
