//! Simulated response latency for list requests.
//!
//! The frontend this directory stands in for expects list calls to take a
//! moment. The wait happens after the directory has produced its result and
//! is never cancelled; [`NoDelay`] is the default.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Strategy awaited before a list response is returned.
#[async_trait]
pub trait ResponseDelay: Send + Sync {
    async fn wait(&self);
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl ResponseDelay for NoDelay {
    async fn wait(&self) {}
}

/// Sleeps for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl ResponseDelay for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Pick a strategy from a millisecond setting; `0` disables the delay.
pub fn from_millis(ms: u64) -> Arc<dyn ResponseDelay> {
    if ms == 0 {
        Arc::new(NoDelay)
    } else {
        Arc::new(FixedDelay(Duration::from_millis(ms)))
    }
}
