//! Core sampling loop for Resonance sensor nodes
//!
//! Reads a DHT-class temperature/humidity sensor and a PIR motion input on a
//! fixed cadence, smooths both climate channels with a short moving average,
//! counts motion events as rising edges, and emits one JSON record per
//! successful iteration.
//!
//! Key constraints:
//! - Runs on small MCUs (`no_std` + `alloc`)
//! - Every failure is recovered inside the iteration
//! - All configuration is compiled in (see [`constants`])
//!
//! ```no_run
//! use resonance_core::{SamplingLoop, Scheduler, Shutdown};
//! # use resonance_core::{HumiditySensor, DigitalInput, Level, SensorError, RecordSink, EmitError};
//! # use resonance_core::traits::{CountDown, NullDiagnostics};
//! # use resonance_core::time::FixedTime;
//! # struct Dht; impl HumiditySensor for Dht {
//! #     fn measure(&mut self) -> Result<(), SensorError> { Ok(()) }
//! #     fn temperature(&self) -> f64 { 21.0 } fn humidity(&self) -> f64 { 48.0 } }
//! # struct Pir; impl DigitalInput for Pir { fn value(&mut self) -> Level { Level::Low } }
//! # struct Uart; impl RecordSink for Uart { fn emit(&mut self, _: &str) -> Result<(), EmitError> { Ok(()) } }
//! # struct Timer; impl CountDown for Timer {
//! #     fn start(&mut self, _: fugit::MillisDurationU32) {}
//! #     fn wait(&mut self) -> nb::Result<(), core::convert::Infallible> { Ok(()) } }
//!
//! static SHUTDOWN: Shutdown = Shutdown::new();
//!
//! let mut sampler = SamplingLoop::new(Dht, Pir, FixedTime::new(0), NullDiagnostics, Uart);
//! let mut scheduler = Scheduler::with_poll_interval(Timer);
//!
//! scheduler.run(&SHUTDOWN, || {
//!     sampler.step();
//! });
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod buffer;
pub mod constants;
pub mod edge;
pub mod errors;
pub mod filter;
pub mod reading;
pub mod sampler;
pub mod scheduler;
pub mod time;
pub mod traits;

// Public API
pub use edge::{EdgeDetector, Level};
pub use errors::{EmitError, FilterError, InvalidLevel, SensorError};
pub use filter::MovingAverageFilter;
pub use reading::Reading;
pub use sampler::SamplingLoop;
pub use scheduler::{Scheduler, Shutdown};
pub use time::{TimeSource, Timestamp};
pub use traits::{DiagnosticSink, DigitalInput, HumiditySensor, RecordSink, Sample};

/// Crate version, from `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
