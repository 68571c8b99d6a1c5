//! Sensor Wiring
//!
//! GPIO numbers of the reference board. The core never touches pins; these
//! are consumed by whatever constructs the hardware adapters.

/// GPIO carrying the DHT22 single-wire data line (D15).
pub const DHT_PIN: u8 = 15;

/// GPIO carrying the PIR motion output (D14).
pub const PIR_PIN: u8 = 14;
