//! Collaborator Ports
//!
//! The sampling loop never touches hardware. Everything it consumes or
//! produces goes through one of these traits, and the board (or the host
//! simulator, or a test) plugs in the implementation.
//!
//! ## Module Organization
//!
//! - [`sensor`] - temperature/humidity sensor and digital input
//! - [`output`] - diagnostic and record sinks
//! - [`timer`] - non-blocking count-down used by the scheduler
//!
//! ```text
//!  HumiditySensor ──┐
//!                   ├──► SamplingLoop ──► RecordSink
//!  DigitalInput ────┘         │
//!                             └─────────► DiagnosticSink
//! ```

pub mod output;
pub mod sensor;
pub mod timer;

pub use output::{DiagnosticSink, NullDiagnostics, RecordSink};
pub use sensor::{DigitalInput, HumiditySensor, Sample};
pub use timer::CountDown;
