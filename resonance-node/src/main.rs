//! Resonance sensor node, host build
//!
//! Runs the firmware loop against simulated sensors: prints the boot banner,
//! then every 500 ms reads the (simulated) DHT22 and PIR and writes one JSON
//! record per successful read to stdout. Runs until the process is killed.
//!
//! ```text
//! $ resonance-node
//! Ecosystem of Resonance - Sensores Iniciados
//! --------------------------------------------
//! PIR en D14 | DHT22 en D15
//! --------------------------------------------
//! {"temperature":22.01,"humidity":50.12,"motion":0,"count":0,"timestamp":1760700000.123}
//! ```

mod console;
mod sim;

use std::io;

use resonance_core::constants::{DHT_PIN, PIR_PIN, WINDOW_SIZE};
use resonance_core::time::SystemTime;
use resonance_core::{SamplingLoop, Scheduler, Shutdown};

use console::{ConsoleDiagnostics, ConsoleLogger, StdTimer, StdoutRecords};
use sim::{SimulatedDht22, SimulatedPir};

/// Never requested in this build; the process ends by signal
static SHUTDOWN: Shutdown = Shutdown::new();

fn main() {
    if let Err(err) = ConsoleLogger::install() {
        eprintln!("logger unavailable: {}", err);
    }

    if let Err(err) = console::print_banner(&mut io::stdout().lock()) {
        log::warn!("banner not printed: {}", err);
    }

    log::info!(
        "simulated DHT22 on GPIO {}, PIR on GPIO {}, smoothing over {} samples",
        DHT_PIN,
        PIR_PIN,
        WINDOW_SIZE
    );

    let mut sampler = SamplingLoop::new(
        SimulatedDht22::from_entropy(),
        SimulatedPir::from_entropy(),
        SystemTime,
        ConsoleDiagnostics::new(io::stdout()),
        StdoutRecords::new(io::stdout()),
    );

    let mut scheduler = Scheduler::with_poll_interval(StdTimer::new());
    scheduler.run(&SHUTDOWN, || {
        sampler.step();
    });
}
