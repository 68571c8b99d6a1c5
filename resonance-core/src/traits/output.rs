//! Output ports
//!
//! Two channels leave the loop: free-text diagnostics (sensor failures) and
//! the structured record stream. On the reference board both end up on the
//! same UART, but they are separate ports so a host can route them apart.

use core::fmt;

use crate::errors::EmitError;

/// Free-text diagnostic lines
///
/// Takes preformatted arguments so implementations can write straight to
/// the transport without an intermediate allocation.
pub trait DiagnosticSink {
    /// Write one line
    fn report(&mut self, line: fmt::Arguments<'_>);
}

/// Structured record stream, one record per line
pub trait RecordSink {
    /// Write `line` plus a terminator and flush before returning
    fn emit(&mut self, line: &str) -> Result<(), EmitError>;
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &mut D {
    fn report(&mut self, line: fmt::Arguments<'_>) {
        (**self).report(line)
    }
}

impl<R: RecordSink + ?Sized> RecordSink for &mut R {
    fn emit(&mut self, line: &str) -> Result<(), EmitError> {
        (**self).emit(line)
    }
}

/// Discards diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn report(&mut self, _line: fmt::Arguments<'_>) {}
}
