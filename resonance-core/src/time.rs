//! Time management for the sampling loop
//!
//! Records carry a wall-clock timestamp. The loop asks a [`TimeSource`] for
//! "now" once per iteration and converts it to epoch seconds for output.
//!
//! - `SystemTime`: host wall clock (std only)
//! - `FixedTime`: settable clock for tests and simulation

use crate::constants::time::MS_PER_SECOND;

/// Timestamp in milliseconds since the Unix epoch (or boot, for monotonic sources)
pub type Timestamp = u64;

/// Source of time for the loop
///
/// ## Example Implementation
///
/// ```rust
/// use resonance_core::time::{TimeSource, Timestamp};
///
/// struct RtcClock {
///     epoch_offset_ms: u64,
///     ticks_ms: u64,
/// }
///
/// impl TimeSource for RtcClock {
///     fn now(&self) -> Timestamp {
///         self.epoch_offset_ms + self.ticks_ms
///     }
/// }
/// ```
pub trait TimeSource {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Convert a millisecond timestamp to fractional epoch seconds
pub fn to_epoch_seconds(timestamp: Timestamp) -> f64 {
    timestamp as f64 / MS_PER_SECOND as f64
}

/// Host wall clock
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Settable clock for tests
///
/// Interior mutability lets a test keep a shared reference to the clock
/// while the loop owns another and still advance time between iterations.
#[derive(Debug, Default)]
pub struct FixedTime {
    timestamp: core::cell::Cell<Timestamp>,
}

impl FixedTime {
    /// Clock stopped at `timestamp` (ms)
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp: core::cell::Cell::new(timestamp),
        }
    }

    /// Jump to `timestamp`
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move forward by `ms`, saturating at `u64::MAX`
    pub fn advance(&self, ms: u64) {
        self.timestamp.set(self.timestamp.get().saturating_add(ms));
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }
}
