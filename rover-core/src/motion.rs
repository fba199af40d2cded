//! Motion Module
//!
//! Maps the shared movement state onto a drive. One wake of the motor task
//! results in exactly one actuation of whatever the movement state is at that
//! moment; commands that arrived in between are coalesced away, the newest
//! direction simply supersedes the old one.

use crate::config::DRIVE_SPEED;
use crate::fmt::{info, warn};
use crate::state::{MovementState, SharedState};
use crate::Wake;

/// Actuation interface of the track drive
///
/// Speeds are duty percentages in `0..=100`. Turns are executed in place.
pub trait Drive {
    type Error;

    fn stop(&mut self) -> Result<(), Self::Error>;
    fn forward(&mut self, speed: u8) -> Result<(), Self::Error>;
    fn backward(&mut self, speed: u8) -> Result<(), Self::Error>;
    fn left(&mut self, speed: u8) -> Result<(), Self::Error>;
    fn right(&mut self, speed: u8) -> Result<(), Self::Error>;
}

/// Issues the single drive call that corresponds to `movement`
pub fn actuate<D: Drive>(drive: &mut D, movement: MovementState) -> Result<(), D::Error> {
    match movement {
        MovementState::Stop => drive.stop(),
        MovementState::Forward => drive.forward(DRIVE_SPEED),
        MovementState::Backward => drive.backward(DRIVE_SPEED),
        MovementState::Left => drive.left(DRIVE_SPEED),
        MovementState::Right => drive.right(DRIVE_SPEED),
    }
}

/// Motor control loop state
pub struct MotorControl<'a, D: Drive> {
    drive: D,
    state: &'a SharedState,
    wake: &'a Wake,
}

impl<'a, D: Drive> MotorControl<'a, D> {
    pub fn new(drive: D, state: &'a SharedState, wake: &'a Wake) -> Self {
        Self { drive, state, wake }
    }

    /// Waits for a movement change and actuates the current movement state once
    pub async fn serve(&mut self) -> Result<MovementState, D::Error> {
        self.wake.wait().await;
        let movement = self.state.movement();
        actuate(&mut self.drive, movement)?;
        Ok(movement)
    }

    /// Runs the motor control forever. Drive failures are logged and the next
    /// wake is awaited as usual.
    pub async fn run(&mut self) -> ! {
        loop {
            match self.serve().await {
                Ok(movement) => info!("drive {:?}", movement),
                Err(_) => warn!("drive command failed"),
            }
        }
    }

    /// Diagnostic access to the drive, e.g. to inspect a recording drive
    pub fn drive(&self) -> &D {
        &self.drive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Stop,
        Forward(u8),
        Backward(u8),
        Left(u8),
        Right(u8),
    }

    #[derive(Default)]
    struct RecordingDrive {
        calls: Vec<Call>,
        fail: bool,
    }

    impl RecordingDrive {
        fn record(&mut self, call: Call) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.calls.push(call);
            Ok(())
        }
    }

    impl Drive for RecordingDrive {
        type Error = ();

        fn stop(&mut self) -> Result<(), ()> {
            self.record(Call::Stop)
        }
        fn forward(&mut self, speed: u8) -> Result<(), ()> {
            self.record(Call::Forward(speed))
        }
        fn backward(&mut self, speed: u8) -> Result<(), ()> {
            self.record(Call::Backward(speed))
        }
        fn left(&mut self, speed: u8) -> Result<(), ()> {
            self.record(Call::Left(speed))
        }
        fn right(&mut self, speed: u8) -> Result<(), ()> {
            self.record(Call::Right(speed))
        }
    }

    #[test]
    fn each_state_maps_to_one_call_at_full_speed() {
        let mut drive = RecordingDrive::default();
        for movement in [
            MovementState::Forward,
            MovementState::Backward,
            MovementState::Left,
            MovementState::Right,
            MovementState::Stop,
        ] {
            actuate(&mut drive, movement).unwrap();
        }
        assert_eq!(
            drive.calls,
            vec![
                Call::Forward(100),
                Call::Backward(100),
                Call::Left(100),
                Call::Right(100),
                Call::Stop,
            ]
        );
    }

    #[test]
    fn rapid_changes_coalesce_into_latest_state() {
        let state = SharedState::new();
        let wake = Wake::new();
        let mut motor = MotorControl::new(RecordingDrive::default(), &state, &wake);

        state.set_movement(MovementState::Forward);
        wake.signal(());
        state.set_movement(MovementState::Right);
        wake.signal(());

        assert_eq!(block_on(motor.serve()), Ok(MovementState::Right));
        assert_eq!(motor.drive().calls, vec![Call::Right(100)]);
        assert!(!wake.signaled());
    }

    #[test]
    fn drive_error_is_returned_to_the_loop() {
        let state = SharedState::new();
        let wake = Wake::new();
        let drive = RecordingDrive {
            fail: true,
            ..Default::default()
        };
        let mut motor = MotorControl::new(drive, &state, &wake);

        wake.signal(());
        assert_eq!(block_on(motor.serve()), Err(()));
    }
}
