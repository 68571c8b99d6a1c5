//! End-to-end tests for the sampling loop
//!
//! Covers:
//! - Smoothing and rounding of emitted records
//! - Failed reads: diagnostic line, no record, motion still tracked
//! - Non-finite samples never reach the wire
//! - Sustained motion counted once
//! - Output failures absorbed by the loop
//! - Scheduler driving the loop

mod common;

use std::convert::Infallible;

use fugit::MillisDurationU32;
use resonance_core::{
    time::FixedTime,
    traits::{CountDown, NullDiagnostics},
    Level, Reading, SamplingLoop, Scheduler, SensorError, Shutdown,
};

use common::{BrokenSink, LineLog, ScriptedPin, ScriptedSensor};

const T0_MS: u64 = 1_760_700_000_000;

#[test]
fn single_sample_is_rounded_to_two_decimals() {
    let records = LineLog::default();
    let diagnostics = LineLog::default();

    let mut sampler = SamplingLoop::new(
        ScriptedSensor::new([Ok((21.234, 55.678))]),
        ScriptedPin::new(&[0]),
        FixedTime::new(T0_MS),
        diagnostics.clone(),
        records.clone(),
    );

    let reading = sampler.step();
    assert_eq!(reading.temperature, Some(21.23));
    assert_eq!(reading.humidity, Some(55.68));

    assert_eq!(
        records.lines(),
        [r#"{"temperature":21.23,"humidity":55.68,"motion":0,"count":0,"timestamp":1760700000.0}"#]
    );
    assert_eq!(diagnostics.len(), 0);
}

#[test]
fn failed_read_skips_record_but_tracks_motion() {
    let records = LineLog::default();
    let diagnostics = LineLog::default();

    let mut sampler = SamplingLoop::new(
        ScriptedSensor::new([Ok((20.0, 40.0)), Err(SensorError::Checksum)]),
        ScriptedPin::new(&[0, 1]),
        FixedTime::new(T0_MS),
        diagnostics.clone(),
        records.clone(),
    );

    sampler.step();
    let failed = sampler.step();

    assert_eq!(failed.temperature, None);
    assert_eq!(failed.humidity, None);
    assert_eq!(failed.motion, Level::High);
    assert_eq!(failed.count, 1);
    assert_eq!(sampler.motion_count(), 1);

    // Only the first iteration produced a record
    assert_eq!(records.len(), 1);
    assert_eq!(diagnostics.lines(), ["Error: sensor checksum mismatch"]);

    // Window was not touched by the failure
    assert_eq!(sampler.temperature_window().len(), 1);
}

#[test]
fn failed_read_on_first_iteration_does_not_need_a_mean() {
    let records = LineLog::default();
    let diagnostics = LineLog::default();

    let mut sampler = SamplingLoop::new(
        ScriptedSensor::new([Err(SensorError::Timeout), Ok((18.0, 60.0))]),
        ScriptedPin::new(&[]),
        FixedTime::new(T0_MS),
        diagnostics.clone(),
        records.clone(),
    );

    let first = sampler.step();
    assert!(!first.is_complete());
    assert!(sampler.temperature_window().is_empty());

    let second = sampler.step();
    assert_eq!(second.temperature, Some(18.0));
    assert_eq!(records.len(), 1);
    assert_eq!(diagnostics.lines(), ["Error: sensor read timed out"]);
}

#[test]
fn infinite_sample_withholds_records_until_evicted() {
    let records = LineLog::default();
    let diagnostics = LineLog::default();
    let script = std::iter::once(Ok((f64::INFINITY, 50.0)))
        .chain(std::iter::repeat(Ok((20.0, 50.0))).take(5));

    let mut sampler = SamplingLoop::new(
        ScriptedSensor::new(script),
        ScriptedPin::new(&[]),
        FixedTime::new(T0_MS),
        diagnostics.clone(),
        records.clone(),
    );

    for _ in 0..5 {
        let reading = sampler.step();
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.humidity, Some(50.0));
    }
    assert_eq!(records.len(), 0);

    // Sixth push evicts the infinity
    let recovered = sampler.step();
    assert_eq!(recovered.temperature, Some(20.0));
    assert_eq!(
        records.lines(),
        [r#"{"temperature":20.0,"humidity":50.0,"motion":0,"count":0,"timestamp":1760700000.0}"#]
    );
    assert!(records.lines().iter().all(|line| !line.contains("null")));
    assert_eq!(diagnostics.len(), 0);
}

#[test]
fn sustained_high_counts_once() {
    let records = LineLog::default();

    let mut sampler = SamplingLoop::new(
        ScriptedSensor::steady(22.0, 45.0, 3),
        ScriptedPin::new(&[1, 1, 0]),
        FixedTime::new(T0_MS),
        NullDiagnostics,
        records.clone(),
    );

    for _ in 0..3 {
        sampler.step();
    }

    let decoded: Vec<Reading> = records
        .lines()
        .iter()
        .map(|line| Reading::from_line(line).unwrap())
        .collect();

    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].motion, Level::High);
    assert_eq!(decoded[1].motion, Level::High);
    assert_eq!(decoded[0].count, 1);
    assert_eq!(decoded[1].count, 1);
    assert_eq!(decoded[2].motion, Level::Low);
    assert_eq!(decoded[2].count, 1);
}

#[test]
fn moving_average_spans_last_five_samples() {
    let records = LineLog::default();
    let script = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0].map(|t| Ok((t, t + 1.0)));

    let mut sampler = SamplingLoop::new(
        ScriptedSensor::new(script),
        ScriptedPin::new(&[]),
        FixedTime::new(T0_MS),
        NullDiagnostics,
        records.clone(),
    );

    let readings: Vec<Reading> = (0..6).map(|_| sampler.step()).collect();

    assert_eq!(readings[0].temperature, Some(10.0));
    assert_eq!(readings[1].temperature, Some(15.0));
    assert_eq!(readings[4].temperature, Some(30.0));
    // [20, 30, 40, 50, 60]
    assert_eq!(readings[5].temperature, Some(40.0));
    assert_eq!(readings[5].humidity, Some(41.0));
    assert!(sampler.temperature_window().is_full());
}

#[test]
fn timestamp_follows_clock() {
    let records = LineLog::default();
    let clock = FixedTime::new(T0_MS);

    let mut sampler = SamplingLoop::new(
        ScriptedSensor::steady(20.0, 50.0, 2),
        ScriptedPin::new(&[]),
        &clock,
        NullDiagnostics,
        records.clone(),
    );

    let first = sampler.step();
    clock.advance(500);
    let second = sampler.step();

    assert_eq!(first.timestamp, 1_760_700_000.0);
    assert_eq!(second.timestamp, 1_760_700_000.5);
}

#[test]
fn broken_output_is_absorbed() {
    let diagnostics = LineLog::default();
    let mut sink = BrokenSink::default();

    let mut sampler = SamplingLoop::new(
        ScriptedSensor::steady(20.0, 50.0, 2),
        ScriptedPin::new(&[1, 0]),
        FixedTime::new(T0_MS),
        diagnostics.clone(),
        &mut sink,
    );

    sampler.step();
    sampler.step();

    assert_eq!(sampler.emitted(), 0);
    assert_eq!(sampler.iterations(), 2);
    assert_eq!(sampler.motion_count(), 1);
    drop(sampler);

    assert_eq!(sink.attempts, 2);
    assert_eq!(
        diagnostics.lines(),
        ["Error: record write failed", "Error: record write failed"]
    );
}

/// Timer that expires immediately and counts how often it was armed
#[derive(Default)]
struct InstantTimer {
    armed: u32,
}

impl CountDown for InstantTimer {
    fn start(&mut self, _duration: MillisDurationU32) {
        self.armed += 1;
    }

    fn wait(&mut self) -> nb::Result<(), Infallible> {
        Ok(())
    }
}

#[test]
fn scheduler_drives_sampling_until_shutdown() {
    let records = LineLog::default();
    let diagnostics = LineLog::default();
    let shutdown = Shutdown::new();

    let mut pin = ScriptedPin::new(&[0, 1, 1, 0, 1]);
    let mut sampler = SamplingLoop::new(
        ScriptedSensor::new([
            Ok((20.0, 50.0)),
            Ok((21.0, 51.0)),
            Err(SensorError::NoResponse),
            Ok((22.0, 52.0)),
            Ok((23.0, 53.0)),
        ]),
        &mut pin,
        FixedTime::new(T0_MS),
        diagnostics.clone(),
        records.clone(),
    );

    let mut scheduler = Scheduler::with_poll_interval(InstantTimer::default());
    let runs = scheduler.run(&shutdown, || {
        sampler.step();
        if sampler.iterations() == 5 {
            shutdown.request();
        }
    });

    assert_eq!(runs, 5);
    assert_eq!(scheduler.free().armed, 4);
    assert_eq!(sampler.motion_count(), 2);
    assert_eq!(records.len(), 4);
    assert_eq!(diagnostics.lines(), ["Error: sensor did not respond"]);

    drop(sampler);
    assert_eq!(pin.polls(), 5);
}
