//! Serial rover command pipeline
//!
//! Hardware-independent half of the rover firmware. Everything between the
//! receive interrupt and the hardware effects lives here:
//! - `command`: decoding of the single-byte link protocol
//! - `queue`: the bounded, interrupt-safe receive queue
//! - `receive`: the interrupt-side producer and its overflow policy
//! - `state`: atomic movement/connection/run-finished state shared by all tasks
//! - `dispatch`: the brain that turns received bytes into state and wakes
//! - `motion`: movement state to drive effect mapping
//! - `indicator`: searching/connected LED phase and pattern selection
//! - `audio`: milestone cues, the main theme and tone playback
//! - `pwm`: PWM slice timing for the actuator frequencies
//!
//! The firmware crate owns the peripherals and the embassy tasks and calls into
//! this crate from them.

#![cfg_attr(not(test), no_std)]

pub(crate) mod fmt;

pub mod audio;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod indicator;
pub mod motion;
pub mod pwm;
pub mod queue;
pub mod receive;
pub mod state;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Binary wake primitive used between the pipeline stages.
///
/// Signaling an already signaled wake is a no-op, so a consumer woken once must
/// handle everything that accumulated before it blocks again.
pub type Wake = Signal<CriticalSectionRawMutex, ()>;
