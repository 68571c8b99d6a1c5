//! Simulated sensors for running the node without hardware
//!
//! The environment drifts as a bounded random walk: temperature moves at
//! most ±0.05 °C per poll inside 15-35 °C, humidity ±0.2 %RH inside 20-80 %.
//! Someone walks past the PIR about once every hundred polls and the output
//! then stays high for about a second, like a real module's retrigger time.
//! A small share of DHT reads fail so the error path gets exercised too.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use resonance_core::{DigitalInput, HumiditySensor, Level, SensorError};

/// Starting conditions of the simulated room
pub const INITIAL_TEMPERATURE_C: f64 = 22.0;
pub const INITIAL_HUMIDITY_PCT: f64 = 50.0;

const TEMPERATURE_RANGE_C: (f64, f64) = (15.0, 35.0);
const HUMIDITY_RANGE_PCT: (f64, f64) = (20.0, 80.0);
const TEMPERATURE_STEP_C: f64 = 0.05;
const HUMIDITY_STEP_PCT: f64 = 0.2;

/// Share of DHT reads that fail
pub const DEFAULT_FAILURE_RATE: f64 = 0.02;

/// Chance per poll that motion starts
pub const DEFAULT_TRIGGER_PROBABILITY: f64 = 0.01;

/// Polls the PIR output stays high once triggered (2 × 500 ms)
pub const DEFAULT_HOLD_POLLS: u32 = 2;

/// Random-walk DHT22
pub struct SimulatedDht22 {
    rng: StdRng,
    failure_rate: f64,
    temperature: f64,
    humidity: f64,
}

impl SimulatedDht22 {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            failure_rate: DEFAULT_FAILURE_RATE,
            temperature: INITIAL_TEMPERATURE_C,
            humidity: INITIAL_HUMIDITY_PCT,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Override the read failure probability, clamped to [0, 1]
    #[cfg(test)]
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    fn random_failure(&mut self) -> SensorError {
        match self.rng.gen_range(0..3) {
            0 => SensorError::Timeout,
            1 => SensorError::Checksum,
            _ => SensorError::NoResponse,
        }
    }
}

impl HumiditySensor for SimulatedDht22 {
    fn measure(&mut self) -> Result<(), SensorError> {
        if self.rng.gen_bool(self.failure_rate) {
            return Err(self.random_failure());
        }

        let dt = self.rng.gen_range(-TEMPERATURE_STEP_C..=TEMPERATURE_STEP_C);
        let dh = self.rng.gen_range(-HUMIDITY_STEP_PCT..=HUMIDITY_STEP_PCT);

        self.temperature = (self.temperature + dt).clamp(TEMPERATURE_RANGE_C.0, TEMPERATURE_RANGE_C.1);
        self.humidity = (self.humidity + dh).clamp(HUMIDITY_RANGE_PCT.0, HUMIDITY_RANGE_PCT.1);
        Ok(())
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn humidity(&self) -> f64 {
        self.humidity
    }
}

/// PIR that fires at random and holds its output for a few polls
pub struct SimulatedPir {
    rng: StdRng,
    trigger_probability: f64,
    hold_polls: u32,
    remaining: u32,
}

impl SimulatedPir {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            trigger_probability: DEFAULT_TRIGGER_PROBABILITY,
            hold_polls: DEFAULT_HOLD_POLLS,
            remaining: 0,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn with_trigger_probability(mut self, probability: f64) -> Self {
        self.trigger_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Polls a trigger keeps the output high, at least one
    #[cfg(test)]
    pub fn with_hold_polls(mut self, polls: u32) -> Self {
        self.hold_polls = polls.max(1);
        self
    }
}

impl DigitalInput for SimulatedPir {
    fn value(&mut self) -> Level {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Level::High;
        }

        if self.rng.gen_bool(self.trigger_probability) {
            self.remaining = self.hold_polls - 1;
            return Level::High;
        }

        Level::Low
    }
}
