//! Console adapters for the host build
//!
//! On the board every output goes to the UART. On a host the same bytes go
//! to stdout: records and `Error:` lines interleaved exactly as the board
//! prints them, so a serial consumer can be pointed at either. Internal
//! logging from the `log` facade goes to stderr and stays out of the record
//! stream.

use std::fmt;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use fugit::MillisDurationU32;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use resonance_core::traits::CountDown;
use resonance_core::{DiagnosticSink, EmitError, RecordSink};

/// Lines printed once at boot, before the first iteration
pub const BANNER: [&str; 4] = [
    "Ecosystem of Resonance - Sensores Iniciados",
    "--------------------------------------------",
    "PIR en D14 | DHT22 en D15",
    "--------------------------------------------",
];

/// Write [`BANNER`] and flush
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    for line in BANNER {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Record sink writing one line per record, flushed immediately
pub struct StdoutRecords<W: Write> {
    out: W,
}

impl<W: Write> StdoutRecords<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for StdoutRecords<W> {
    fn emit(&mut self, line: &str) -> Result<(), EmitError> {
        writeln!(self.out, "{}", line)
            .and_then(|()| self.out.flush())
            .map_err(|err| {
                log::debug!("record write: {}", err);
                EmitError::Write
            })
    }
}

/// Diagnostic sink printing free-text lines
pub struct ConsoleDiagnostics<W: Write> {
    out: W,
}

impl<W: Write> ConsoleDiagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for ConsoleDiagnostics<W> {
    fn report(&mut self, line: fmt::Arguments<'_>) {
        // Nowhere left to report a failing diagnostic channel except the log
        if let Err(err) = writeln!(self.out, "{}", line).and_then(|()| self.out.flush()) {
            log::warn!("diagnostic write failed: {}", err);
        }
    }
}

/// `log` backend writing `LEVEL target: message` to stderr
pub struct ConsoleLogger {
    level: LevelFilter,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    level: LevelFilter::Info,
};

impl ConsoleLogger {
    /// Register the global logger at `Info`
    pub fn install() -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER).map(|()| log::set_max_level(LOGGER.level))
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Count-down backed by `thread::sleep`
///
/// `wait()` sleeps for the remaining time and reports `WouldBlock` once,
/// then `Ok` on the next poll, so `nb::block!` never spins.
#[derive(Debug, Default)]
pub struct StdTimer {
    deadline: Option<Instant>,
}

impl StdTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountDown for StdTimer {
    fn start(&mut self, duration: MillisDurationU32) {
        let delay = Duration::from_millis(u64::from(duration.to_millis()));
        self.deadline = Some(Instant::now() + delay);
    }

    fn wait(&mut self) -> nb::Result<(), std::convert::Infallible> {
        let Some(deadline) = self.deadline else {
            return Ok(());
        };

        let now = Instant::now();
        if now >= deadline {
            self.deadline = None;
            return Ok(());
        }

        thread::sleep(deadline - now);
        Err(nb::Error::WouldBlock)
    }
}
