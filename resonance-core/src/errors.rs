//! Error Types for the Sampling Loop
//!
//! ## Design Philosophy
//!
//! Errors here follow the same rules as the rest of the firmware:
//!
//! 1. **Small Size**: every variant is a few bytes so errors can be returned
//!    from the hot path and copied into log calls freely.
//!
//! 2. **No Heap Allocation**: no `String` payloads, only `Copy` data.
//!
//! 3. **Recovered Locally**: none of these errors escape an iteration of the
//!    sampling loop. They exist so the loop can branch on a typed result and
//!    report what happened.
//!
//! ## Error Categories
//!
//! ### Acquisition
//! - `SensorError`: the DHT-class sensor did not produce a sample this tick
//!   (timing, checksum, or no response from the bus).
//!
//! ### Smoothing
//! - `FilterError::EmptyWindow`: a mean was requested before any sample.
//!
//! ### Output
//! - `EmitError`: a record could not be encoded or written.
//!
//! ### Input domain
//! - `InvalidLevel`: a raw pin value other than 0 or 1.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use resonance_core::{HumiditySensor, SensorError, Sample};
//!
//! fn read_once<S: HumiditySensor>(sensor: &mut S) -> Option<Sample> {
//!     match sensor.sample() {
//!         Ok(sample) => Some(sample),
//!         Err(SensorError::Checksum) => {
//!             // Corrupted frame, next tick will try again
//!             None
//!         }
//!         Err(_) => None,
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Failure to acquire a temperature/humidity sample
///
/// All variants are handled identically by the sampling loop. The split only
/// exists so diagnostics say something useful.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Sensor did not finish its response within the bus timing window
    #[error("sensor read timed out")]
    Timeout,

    /// Frame arrived but the checksum byte did not match
    #[error("sensor checksum mismatch")]
    Checksum,

    /// Sensor never pulled the line low after the start signal
    #[error("sensor did not respond")]
    NoResponse,
}

/// Moving average errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// Mean requested from a window that has never seen a sample
    #[error("mean of empty window")]
    EmptyWindow,
}

/// Failure to put a record on the output channel
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitError {
    /// Record could not be serialized
    #[error("record encoding failed")]
    Encode,

    /// Output channel rejected the write or flush
    #[error("record write failed")]
    Write,
}

/// Raw pin value outside the two-valued domain
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid pin level {value}, expected 0 or 1")]
pub struct InvalidLevel {
    /// The rejected raw value
    pub value: u8,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Timeout => defmt::write!(fmt, "sensor timeout"),
            Self::Checksum => defmt::write!(fmt, "sensor checksum"),
            Self::NoResponse => defmt::write!(fmt, "sensor no response"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyWindow => defmt::write!(fmt, "empty window"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EmitError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Encode => defmt::write!(fmt, "encode failed"),
            Self::Write => defmt::write!(fmt, "write failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InvalidLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "invalid level {}", self.value)
    }
}
