//! Sensor ports
//!
//! `HumiditySensor` mirrors the shape of DHT-class drivers: one call triggers
//! a conversion and may fail, two accessors return the values of the last
//! successful conversion. [`HumiditySensor::sample`] folds that into one typed
//! result so the loop can branch on it.

use crate::edge::Level;
use crate::errors::SensorError;

/// One successful temperature/humidity conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
}

/// Combined temperature/humidity sensor (DHT11/DHT22/AM2302 style)
///
/// Implementations enforce their own bus timeout; `measure()` must return
/// within a bounded time.
///
/// ## Example Implementation
///
/// ```rust
/// use resonance_core::{HumiditySensor, SensorError};
///
/// struct Dht22 {
///     frame: [u8; 5],
///     temperature: f64,
///     humidity: f64,
/// }
///
/// impl HumiditySensor for Dht22 {
///     fn measure(&mut self) -> Result<(), SensorError> {
///         let f = self.frame;
///         let sum = f[0].wrapping_add(f[1]).wrapping_add(f[2]).wrapping_add(f[3]);
///         if sum != f[4] {
///             return Err(SensorError::Checksum);
///         }
///         self.humidity = u16::from_be_bytes([f[0], f[1]]) as f64 / 10.0;
///         self.temperature = u16::from_be_bytes([f[2] & 0x7F, f[3]]) as f64 / 10.0;
///         Ok(())
///     }
///
///     fn temperature(&self) -> f64 {
///         self.temperature
///     }
///
///     fn humidity(&self) -> f64 {
///         self.humidity
///     }
/// }
/// ```
pub trait HumiditySensor {
    /// Trigger a conversion and latch its result
    fn measure(&mut self) -> Result<(), SensorError>;

    /// Temperature of the last successful conversion, °C
    fn temperature(&self) -> f64;

    /// Humidity of the last successful conversion, %RH
    fn humidity(&self) -> f64;

    /// Measure and return both values, or the failure
    fn sample(&mut self) -> Result<Sample, SensorError> {
        self.measure()?;
        Ok(Sample {
            temperature: self.temperature(),
            humidity: self.humidity(),
        })
    }
}

/// Polled digital input pin
pub trait DigitalInput {
    /// Current level of the pin
    fn value(&mut self) -> Level;
}

impl<S: HumiditySensor + ?Sized> HumiditySensor for &mut S {
    fn measure(&mut self) -> Result<(), SensorError> {
        (**self).measure()
    }

    fn temperature(&self) -> f64 {
        (**self).temperature()
    }

    fn humidity(&self) -> f64 {
        (**self).humidity()
    }

    fn sample(&mut self) -> Result<Sample, SensorError> {
        (**self).sample()
    }
}

impl<P: DigitalInput + ?Sized> DigitalInput for &mut P {
    fn value(&mut self) -> Level {
        (**self).value()
    }
}
