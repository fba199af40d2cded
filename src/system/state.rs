//! Global robot state
//!
//! The single instance of the shared pipeline state. All fields are atomics, so
//! tasks and the receive interrupt access it directly, without a lock.

use rover_core::state::SharedState;

/// Movement, connection and run-finished state of the rover
pub static ROBOT_STATE: SharedState = SharedState::new();
