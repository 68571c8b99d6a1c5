//! Fixed-cadence loop driver
//!
//! The firmware body is "do one iteration, wait, repeat forever". The
//! [`Scheduler`] owns the wait half: it runs a task, arms a [`CountDown`]
//! for the configured interval and blocks on it with `nb::block!`. The delay
//! is measured from the end of one iteration to the start of the next, so a
//! slow sensor read stretches the period instead of shortening the pause.
//!
//! ## Shutdown
//!
//! The reference deployment never stops. [`Shutdown`] is there so a host,
//! a test, or an interrupt handler can end the loop cleanly between
//! iterations. It is a plain atomic flag and can live in a `static`:
//!
//! ```rust
//! use resonance_core::scheduler::Shutdown;
//!
//! static SHUTDOWN: Shutdown = Shutdown::new();
//!
//! // from an interrupt or another context
//! SHUTDOWN.request();
//! assert!(SHUTDOWN.is_requested());
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use fugit::MillisDurationU32;

use crate::constants::POLL_INTERVAL;
use crate::traits::CountDown;

/// Cooperative stop request for [`Scheduler::run`]
#[derive(Debug, Default)]
pub struct Shutdown {
    requested: AtomicBool,
}

impl Shutdown {
    /// Flag in the "keep running" state
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Ask the loop to stop after the current iteration
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }

    /// Whether a stop has been requested
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

/// Runs a task on a fixed cadence
pub struct Scheduler<T: CountDown> {
    timer: T,
    interval: MillisDurationU32,
}

impl<T: CountDown> Scheduler<T> {
    /// Scheduler pausing `interval` between task runs
    pub fn new(timer: T, interval: MillisDurationU32) -> Self {
        Self { timer, interval }
    }

    /// Scheduler using the deployment cadence ([`POLL_INTERVAL`])
    pub fn with_poll_interval(timer: T) -> Self {
        Self::new(timer, POLL_INTERVAL)
    }

    /// Configured pause between iterations
    pub fn interval(&self) -> MillisDurationU32 {
        self.interval
    }

    /// Run `task` until `shutdown` is requested
    ///
    /// The flag is checked before each iteration and again right after it,
    /// so a stop requested by the task itself skips the final wait. Returns
    /// the number of times `task` ran.
    pub fn run<F>(&mut self, shutdown: &Shutdown, mut task: F) -> u64
    where
        F: FnMut(),
    {
        log_info!("scheduler started, interval {} ms", self.interval.to_millis());

        let mut runs: u64 = 0;
        while !shutdown.is_requested() {
            task();
            runs += 1;

            if shutdown.is_requested() {
                break;
            }

            self.timer.start(self.interval);
            match nb::block!(self.timer.wait()) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        }

        log_info!("scheduler stopped after {} iterations", runs);
        runs
    }

    /// Release the timer
    pub fn free(self) -> T {
        self.timer
    }
}
