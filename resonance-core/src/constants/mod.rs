//! Constants for Resonance Core
//!
//! Every compiled-in value of the node lives here. The node has no runtime
//! configuration surface: no flags, no environment, no files. Changing the
//! behaviour means changing a constant and reflashing.
//!
//! ## Organization
//!
//! - **Buffers**: smoothing window size
//! - **Sensors**: pin assignments of the reference board
//! - **Time**: loop cadence

/// Smoothing window sizes.
pub mod buffers;

/// Pin assignments and sensor identities.
pub mod sensors;

/// Loop cadence.
pub mod time;

pub use buffers::WINDOW_SIZE;
pub use sensors::{DHT_PIN, PIR_PIN};
pub use time::{POLL_INTERVAL, POLL_INTERVAL_MS};
