//! Task wakes
//!
//! One binary wake per consumer of the pipeline. Signaling is synchronous and
//! never blocks, so it is fine from interrupt context; repeated signals before
//! the consumer runs collapse into one.

use rover_core::Wake;

/// Raised by the receive interrupt for every byte put into the queue
pub static BRAIN_WAKE: Wake = Wake::new();

/// Raised by the brain whenever the movement state was set
pub static MOTOR_WAKE: Wake = Wake::new();

/// Raised on the connection and run-finished milestones
pub static AUDIO_WAKE: Wake = Wake::new();
