//! Shared Robot State
//!
//! Cross-task state of the rover, kept as plain atomic scalars:
//! - Movement state: written by the brain, read by the motor and indicator tasks
//! - Connection flag: set once by the brain when the link reports CONNECTED
//! - Run-finished flag: set once by the run-finished button
//! - Last received byte: diagnostic copy of the most recent command byte
//!
//! Each value has exactly one writer. Readers may observe a value that is
//! already stale, but never a torn one, which is why nothing here is a
//! composite structure behind a lock. Stores use release ordering and loads use
//! acquire ordering.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::command;

/// Commanded direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MovementState {
    Stop = 0,
    Forward = 1,
    Backward = 2,
    Left = 3,
    Right = 4,
}

impl MovementState {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Forward,
            2 => Self::Backward,
            3 => Self::Left,
            4 => Self::Right,
            // only ever stored from a `MovementState`, so this is `Stop`
            _ => Self::Stop,
        }
    }

    /// Whether the robot is commanded to move at all
    pub const fn is_moving(self) -> bool {
        !matches!(self, Self::Stop)
    }
}

/// Atomic state shared by the pipeline tasks
pub struct SharedState {
    movement: AtomicU8,
    connected: AtomicBool,
    run_finished: AtomicBool,
    last_received: AtomicU8,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    /// Initial state: stopped, not connected, run not finished
    pub const fn new() -> Self {
        Self {
            movement: AtomicU8::new(MovementState::Stop as u8),
            connected: AtomicBool::new(false),
            run_finished: AtomicBool::new(false),
            last_received: AtomicU8::new(command::RESERVED),
        }
    }

    pub fn movement(&self) -> MovementState {
        MovementState::from_raw(self.movement.load(Ordering::Acquire))
    }

    pub fn set_movement(&self, movement: MovementState) {
        self.movement.store(movement as u8, Ordering::Release);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Marks the link as connected, returns `true` if this call made the transition
    pub fn mark_connected(&self) -> bool {
        !self.connected.swap(true, Ordering::AcqRel)
    }

    pub fn is_run_finished(&self) -> bool {
        self.run_finished.load(Ordering::Acquire)
    }

    /// Marks the run as finished, returns `true` if this call made the transition
    pub fn mark_run_finished(&self) -> bool {
        !self.run_finished.swap(true, Ordering::AcqRel)
    }

    pub fn last_received(&self) -> u8 {
        self.last_received.load(Ordering::Acquire)
    }

    pub fn set_last_received(&self, byte: u8) {
        self.last_received.store(byte, Ordering::Release);
    }
}
