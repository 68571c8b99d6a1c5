//! Count-down timer port
//!
//! Same contract as the classic embedded-hal `CountDown`: `start()` arms the
//! timer, `wait()` returns `WouldBlock` until it expires. The scheduler
//! drives it with `nb::block!`, so a board can back it with a hardware timer
//! and a host with a sleeping implementation.

use core::convert::Infallible;

use fugit::MillisDurationU32;

/// One-shot count-down
pub trait CountDown {
    /// Arm the timer to expire `duration` from now
    fn start(&mut self, duration: MillisDurationU32);

    /// `Ok(())` once expired, `WouldBlock` before
    fn wait(&mut self) -> nb::Result<(), Infallible>;
}

impl<C: CountDown + ?Sized> CountDown for &mut C {
    fn start(&mut self, duration: MillisDurationU32) {
        (**self).start(duration)
    }

    fn wait(&mut self) -> nb::Result<(), Infallible> {
        (**self).wait()
    }
}
