//! Build-time configuration of the command pipeline
//!
//! All capacities and timings are fixed at compile time; nothing here is
//! adjustable at runtime.

use embassy_time::Duration;

/// Capacity of the receive queue between the UART interrupt and the brain
pub const COMMAND_QUEUE_CAPACITY: usize = 16;

/// Duty (percent) used for every drive command
pub const DRIVE_SPEED: u8 = 100;

/// Red indicator half-period while the robot stands still
pub const RED_BLINK_STOPPED: Duration = Duration::from_millis(250);

/// Red indicator half-period while the robot moves
pub const RED_BLINK_MOVING: Duration = Duration::from_millis(500);

/// Time each green LED stays lit in the running pattern
pub const GREEN_RUNNING_STEP: Duration = Duration::from_millis(100);

/// Poll period of the green row while showing the steady pattern
pub const GREEN_STEADY_POLL: Duration = Duration::from_millis(50);

/// Number of LEDs in the green indicator row
pub const GREEN_LED_COUNT: usize = 8;

/// Half-period of the alternating pattern shown while searching for the link
pub const SEARCH_BLINK: Duration = Duration::from_millis(500);

/// On/off time of each confirmation blink when the link comes up
pub const CONNECT_BLINK: Duration = Duration::from_millis(200);

/// Number of confirmation blinks when the link comes up
pub const CONNECT_BLINK_COUNT: usize = 2;
