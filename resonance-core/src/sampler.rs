//! The sampling loop body
//!
//! ## Iteration
//!
//! ```text
//! sensor.sample() ──ok──► push T, push H ──► rounded means ─┐
//!        │                                                   │
//!        └──err──► "Error: ..." to diagnostics, T/H absent ──┤
//!                                                            ▼
//! pir.value() ──► EdgeDetector::update ──► Reading { T, H, motion, count, ts }
//!                                                            │
//!                                   complete? ──yes──► RecordSink::emit
//! ```
//!
//! A failed read never stops the iteration: motion is still polled and the
//! edge counter still advances, only the record line is skipped.
//!
//! Pacing is not handled here. [`SamplingLoop::step`] runs exactly one
//! iteration and returns; the [`Scheduler`](crate::scheduler::Scheduler)
//! decides when the next one happens.

use crate::constants::WINDOW_SIZE;
use crate::edge::EdgeDetector;
use crate::filter::MovingAverageFilter;
use crate::reading::Reading;
use crate::time::{to_epoch_seconds, TimeSource};
use crate::traits::{DiagnosticSink, DigitalInput, HumiditySensor, RecordSink};

/// Owns the smoothing and motion state plus every collaborator
///
/// - `S`: temperature/humidity sensor
/// - `P`: PIR input pin
/// - `C`: wall clock
/// - `D`: diagnostic output
/// - `R`: record output
/// - `N`: smoothing window, [`WINDOW_SIZE`] by default
pub struct SamplingLoop<S, P, C, D, R, const N: usize = WINDOW_SIZE> {
    sensor: S,
    pir: P,
    clock: C,
    diagnostics: D,
    records: R,

    temperature: MovingAverageFilter<N>,
    humidity: MovingAverageFilter<N>,
    motion: EdgeDetector,

    iterations: u64,
    emitted: u64,
}

impl<S, P, C, D, R> SamplingLoop<S, P, C, D, R>
where
    S: HumiditySensor,
    P: DigitalInput,
    C: TimeSource,
    D: DiagnosticSink,
    R: RecordSink,
{
    /// Wire up a loop with [`WINDOW_SIZE`] smoothing, empty windows and a
    /// zero motion count
    pub fn new(sensor: S, pir: P, clock: C, diagnostics: D, records: R) -> Self {
        Self::with_window(sensor, pir, clock, diagnostics, records)
    }
}

impl<S, P, C, D, R, const N: usize> SamplingLoop<S, P, C, D, R, N>
where
    S: HumiditySensor,
    P: DigitalInput,
    C: TimeSource,
    D: DiagnosticSink,
    R: RecordSink,
{
    /// Same as [`SamplingLoop::new`] with an `N`-sample window
    pub fn with_window(sensor: S, pir: P, clock: C, diagnostics: D, records: R) -> Self {
        Self {
            sensor,
            pir,
            clock,
            diagnostics,
            records,
            temperature: MovingAverageFilter::new(),
            humidity: MovingAverageFilter::new(),
            motion: EdgeDetector::new(),
            iterations: 0,
            emitted: 0,
        }
    }

    /// Run one iteration and return the assembled reading
    ///
    /// The reading is returned whether or not it was emitted; check
    /// [`Reading::is_complete`] to tell.
    pub fn step(&mut self) -> Reading {
        let (temperature, humidity) = match self.sensor.sample() {
            Ok(sample) => {
                self.temperature.push(sample.temperature);
                self.humidity.push(sample.humidity);

                // Both windows were just pushed, neither mean can fail
                (
                    finite(self.temperature.rounded_mean().ok()),
                    finite(self.humidity.rounded_mean().ok()),
                )
            }
            Err(err) => {
                self.diagnostics.report(format_args!("Error: {}", err));
                log_warn!("sensor read failed: {}", err);
                (None, None)
            }
        };

        let motion = self.motion.update(self.pir.value());

        let reading = Reading {
            temperature,
            humidity,
            motion,
            count: self.motion.count(),
            timestamp: to_epoch_seconds(self.clock.now()),
        };

        if reading.is_complete() {
            self.emit(&reading);
        }

        self.iterations += 1;
        reading
    }

    fn emit(&mut self, reading: &Reading) {
        let result = reading
            .to_line()
            .and_then(|line| {
                log_debug!("record {}", line.as_str());
                self.records.emit(&line)
            });

        match result {
            Ok(()) => self.emitted += 1,
            Err(err) => {
                self.diagnostics.report(format_args!("Error: {}", err));
                log_warn!("record dropped: {}", err);
            }
        }
    }

    /// Rising edges seen on the PIR input since creation
    pub fn motion_count(&self) -> u32 {
        self.motion.count()
    }

    /// Temperature smoothing state
    pub fn temperature_window(&self) -> &MovingAverageFilter<N> {
        &self.temperature
    }

    /// Humidity smoothing state
    pub fn humidity_window(&self) -> &MovingAverageFilter<N> {
        &self.humidity
    }

    /// Completed calls to [`step`](Self::step)
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Records successfully handed to the record sink
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (S, P, C, D, R) {
        (self.sensor, self.pir, self.clock, self.diagnostics, self.records)
    }
}

/// A NaN or infinite mean has no JSON number form, so the channel counts
/// as absent until the value leaves the window
fn finite(mean: Option<f64>) -> Option<f64> {
    match mean {
        Some(value) if !value.is_finite() => {
            log_warn!("smoothed value is not finite, record skipped");
            None
        }
        other => other,
    }
}
