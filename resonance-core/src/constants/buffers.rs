//! Buffer Sizes
//!
//! The only buffer in the loop is the per-channel smoothing window.

/// Number of samples averaged per channel.
///
/// Five samples at the 500 ms cadence smooth over the last ~2.5 s, long
/// enough to hide single-frame DHT22 jitter (±0.1 °C, ±0.1 %RH resolution)
/// while still tracking a hand on the sensor within a few seconds.
pub const WINDOW_SIZE: usize = 5;
