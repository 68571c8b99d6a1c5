//! Scripted collaborators for integration tests
//!
//! Each double replays a fixed script and records what the loop did with it,
//! so a test reads as "given these sensor results and pin levels, expect
//! these lines".

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use resonance_core::{
    DiagnosticSink, DigitalInput, EmitError, HumiditySensor, Level, RecordSink, SensorError,
};

/// Sensor that replays a queue of results, then fails with `NoResponse`
pub struct ScriptedSensor {
    script: VecDeque<Result<(f64, f64), SensorError>>,
    latched: (f64, f64),
}

impl ScriptedSensor {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Result<(f64, f64), SensorError>>,
    {
        Self {
            script: script.into_iter().collect(),
            latched: (f64::NAN, f64::NAN),
        }
    }

    /// Same reading every time
    pub fn steady(temperature: f64, humidity: f64, times: usize) -> Self {
        Self::new(std::iter::repeat(Ok((temperature, humidity))).take(times))
    }
}

impl HumiditySensor for ScriptedSensor {
    fn measure(&mut self) -> Result<(), SensorError> {
        let next = self.script.pop_front().unwrap_or(Err(SensorError::NoResponse))?;
        self.latched = next;
        Ok(())
    }

    fn temperature(&self) -> f64 {
        self.latched.0
    }

    fn humidity(&self) -> f64 {
        self.latched.1
    }
}

/// Pin that replays a level sequence, then holds low
pub struct ScriptedPin {
    levels: VecDeque<Level>,
    polls: usize,
}

impl ScriptedPin {
    pub fn new(raw: &[u8]) -> Self {
        Self {
            levels: raw
                .iter()
                .map(|v| Level::try_from(*v).expect("script uses 0/1"))
                .collect(),
            polls: 0,
        }
    }

    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl DigitalInput for ScriptedPin {
    fn value(&mut self) -> Level {
        self.polls += 1;
        self.levels.pop_front().unwrap_or(Level::Low)
    }
}

/// Shared line buffer usable as both sink kinds
///
/// Clones share storage, so a test can hand one clone to the loop and keep
/// another to inspect.
#[derive(Clone, Default)]
pub struct LineLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl LineLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }
}

impl DiagnosticSink for LineLog {
    fn report(&mut self, line: fmt::Arguments<'_>) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl RecordSink for LineLog {
    fn emit(&mut self, line: &str) -> Result<(), EmitError> {
        self.lines.borrow_mut().push(line.to_owned());
        Ok(())
    }
}

/// Record sink whose transport is always down
#[derive(Default)]
pub struct BrokenSink {
    pub attempts: usize,
}

impl RecordSink for BrokenSink {
    fn emit(&mut self, _line: &str) -> Result<(), EmitError> {
        self.attempts += 1;
        Err(EmitError::Write)
    }
}
