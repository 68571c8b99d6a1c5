//! Rising-edge detection for the PIR output
//!
//! A PIR module holds its output high for as long as it sees movement, so
//! counting high samples would count "seconds of motion", not "motions".
//! `EdgeDetector` counts Low -> High transitions instead: a sustained high
//! level contributes exactly one event no matter how many polls it spans.
//!
//! ```text
//! level:  0  0  1  1  0  1
//! count:  0  0  1  1  1  2
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidLevel;

/// Logic level of a digital input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Level {
    /// Pin reads 0
    #[default]
    Low = 0,
    /// Pin reads 1
    High = 1,
}

impl Level {
    /// Numeric pin value, 0 or 1
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// True for [`Level::High`]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Low),
            1 => Ok(Level::High),
            _ => Err(InvalidLevel { value }),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_u8())
    }
}

/// Counts rising edges of a two-valued signal
///
/// Previous level starts at [`Level::Low`], so a signal that is already
/// high on the first poll counts as one edge.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    previous: Level,
    rising_edges: u32,
}

impl EdgeDetector {
    /// Detector with no history and a zero count
    pub const fn new() -> Self {
        Self {
            previous: Level::Low,
            rising_edges: 0,
        }
    }

    /// Record the current level and return it unchanged
    pub fn update(&mut self, current: Level) -> Level {
        if self.previous == Level::Low && current == Level::High {
            self.rising_edges = self.rising_edges.saturating_add(1);
        }

        self.previous = current;
        current
    }

    /// Rising edges seen since creation
    pub fn count(&self) -> u32 {
        self.rising_edges
    }

    /// Level recorded by the last update
    pub fn level(&self) -> Level {
        self.previous
    }
}
