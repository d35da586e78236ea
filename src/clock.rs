//! Clock Module
//!
//! Time source for `createdAt` / `updatedAt` stamps.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Supplies the current time to handlers.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// == System Clock ==
/// Host wall clock, truncated to milliseconds and never moving backwards.
#[derive(Debug, Default)]
pub struct SystemClock {
    /// Highest millisecond value handed out so far
    last_ms: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let host = Utc::now();
        let nanos = host
            .timestamp_nanos_opt()
            .unwrap_or_else(|| host.timestamp_millis().saturating_mul(1_000_000));
        let ms = nanos / 1_000_000;

        // fetch_max returns the previous value; the stamp is whichever is larger
        let previous = self.last_ms.fetch_max(ms, Ordering::SeqCst);
        let stamp = previous.max(ms);

        DateTime::from_timestamp_millis(stamp).unwrap_or(host)
    }
}
