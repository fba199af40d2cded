//! Firmware configuration constants
//!
//! Board-level settings of the rover. Pipeline capacities and indicator timings
//! live in `rover_core::config`.

use embassy_rp::interrupt::Priority;
use embassy_time::Duration;

/// Bit rate of the command link
pub const LINK_BAUD_RATE: u32 = 9600;

/// NVIC priority of the UART receive interrupt, above everything else
pub const LINK_IRQ_PRIORITY: Priority = Priority::P1;

/// NVIC priority of the interrupt executor running the brain
pub const BRAIN_PRIORITY: Priority = Priority::P2;

/// PWM frequency for the track motors
/// We use 10kHz as cheaper DC motors often work better at lower frequencies
pub const MOTOR_PWM_FREQ_HZ: u32 = 10_000;

/// Button debounce delay
pub const DEBOUNCE_DURATION: Duration = Duration::from_millis(30);
