//! Time-Related Constants

use fugit::MillisDurationU32;

/// Delay between the end of one iteration and the start of the next.
///
/// The DHT22 needs at least ~2 s between conversions to deliver a fresh
/// value; polling faster simply re-reads the last conversion or fails the
/// checksum, both of which the loop tolerates. The PIR side benefits from the
/// faster poll.
pub const POLL_INTERVAL_MS: u32 = 500;

/// [`POLL_INTERVAL_MS`] as a typed duration.
pub const POLL_INTERVAL: MillisDurationU32 = MillisDurationU32::millis(POLL_INTERVAL_MS);

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;
