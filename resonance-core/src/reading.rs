//! Output record
//!
//! One `Reading` is assembled per loop iteration and, when complete, written
//! as a single JSON line:
//!
//! ```text
//! {"temperature":21.23,"humidity":55.68,"motion":1,"count":4,"timestamp":1760700000.5}
//! ```
//!
//! Key order is fixed by field order. Absent values are omitted rather than
//! written as `null`, which keeps the line parseable by consumers that only
//! look for the keys they know.

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::edge::Level;
use crate::errors::EmitError;

/// Point-in-time output record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Smoothed temperature, °C, two decimals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Smoothed relative humidity, %, two decimals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,

    /// PIR level at this iteration, serialized as 0 or 1
    pub motion: Level,

    /// Rising edges seen since boot
    pub count: u32,

    /// Seconds since the Unix epoch
    pub timestamp: f64,
}

impl Reading {
    /// True when both smoothed channels are present
    ///
    /// Only complete readings go on the wire.
    pub fn is_complete(&self) -> bool {
        self.temperature.is_some() && self.humidity.is_some()
    }

    /// Encode as one JSON line, without terminator
    ///
    /// Fails with [`EmitError::Encode`] on a NaN or infinite channel, which
    /// `serde_json` would otherwise write as `null`.
    pub fn to_line(&self) -> Result<String, EmitError> {
        let finite = |value: Option<f64>| value.map_or(true, f64::is_finite);
        if !finite(self.temperature) || !finite(self.humidity) {
            return Err(EmitError::Encode);
        }

        serde_json::to_string(self).map_err(|_| EmitError::Encode)
    }

    /// Decode a line produced by [`Reading::to_line`]
    ///
    /// Surrounding whitespace, including the line terminator, is ignored.
    pub fn from_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line.trim())
    }
}
