//! Indicator Logic
//!
//! Phase and pattern selection for the status LEDs. The firmware owns the pins
//! and the timing loops; this module decides what they should show.
//!
//! # Phases
//! - Searching: one supervisor task alternates red and green until the link
//!   reports CONNECTED
//! - Connected: the supervisor confirms the link, starts one task per
//!   indicator and parks itself; the phase never goes back

use embassy_time::Duration;

use crate::config::{GREEN_RUNNING_STEP, GREEN_STEADY_POLL, RED_BLINK_MOVING, RED_BLINK_STOPPED};
use crate::state::MovementState;

/// Lifecycle phase of the indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorPhase {
    Searching,
    Connected,
}

impl IndicatorPhase {
    /// Advances the phase for the current connection flag.
    ///
    /// Returns `true` exactly once, on the searching to connected step; that is
    /// when the connected-phase tasks have to be started.
    pub fn advance(&mut self, connected: bool) -> bool {
        match self {
            Self::Searching if connected => {
                *self = Self::Connected;
                true
            }
            _ => false,
        }
    }
}

/// Half-period of the red blink for the given movement state
pub const fn red_half_period(movement: MovementState) -> Duration {
    if movement.is_moving() {
        RED_BLINK_MOVING
    } else {
        RED_BLINK_STOPPED
    }
}

/// What the green row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GreenPattern {
    /// Every LED lit
    Steady,
    /// One LED lit at a time, walking along the row
    Running,
}

impl GreenPattern {
    pub const fn for_movement(movement: MovementState) -> Self {
        if movement.is_moving() {
            Self::Running
        } else {
            Self::Steady
        }
    }

    /// How long the row keeps one frame of this pattern before polling again
    pub const fn frame(self) -> Duration {
        match self {
            Self::Steady => GREEN_STEADY_POLL,
            Self::Running => GREEN_RUNNING_STEP,
        }
    }
}

/// Cursor of the running light over a row of `N` LEDs
#[derive(Debug, Default)]
pub struct RunningLight<const N: usize> {
    position: usize,
}

impl<const N: usize> RunningLight<N> {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Index of the LED to light in this frame; moves the cursor on
    pub fn step(&mut self) -> usize {
        let lit = self.position;
        self.position = (self.position + 1) % N;
        lit
    }

    /// Restarts the walk from the first LED
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_transitions_exactly_once() {
        let mut phase = IndicatorPhase::Searching;
        assert!(!phase.advance(false));
        assert_eq!(phase, IndicatorPhase::Searching);

        assert!(phase.advance(true));
        assert_eq!(phase, IndicatorPhase::Connected);

        assert!(!phase.advance(true));
        assert!(!phase.advance(false));
        assert_eq!(phase, IndicatorPhase::Connected);
    }

    #[test]
    fn red_blinks_slower_while_moving() {
        assert_eq!(red_half_period(MovementState::Stop), Duration::from_millis(250));
        for movement in [
            MovementState::Forward,
            MovementState::Backward,
            MovementState::Left,
            MovementState::Right,
        ] {
            assert_eq!(red_half_period(movement), Duration::from_millis(500));
        }
    }

    #[test]
    fn green_runs_only_while_moving() {
        assert_eq!(GreenPattern::for_movement(MovementState::Stop), GreenPattern::Steady);
        assert_eq!(GreenPattern::for_movement(MovementState::Left), GreenPattern::Running);
    }

    #[test]
    fn running_light_walks_the_row_and_wraps() {
        let mut light = RunningLight::<3>::new();
        let walk: Vec<usize> = (0..7).map(|_| light.step()).collect();
        assert_eq!(walk, vec![0, 1, 2, 0, 1, 2, 0]);

        light.reset();
        assert_eq!(light.step(), 0);
    }
}
