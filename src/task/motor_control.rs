//! Motor Control Task
//!
//! Waits for movement changes from the brain and drives both tracks
//! accordingly. Only the latest movement state is ever acted upon.

use defmt::{error, info};
use rover_core::motion::MotorControl;

use crate::system::motor::TrackDrive;
use crate::system::resources::MotorDriverResources;
use crate::system::state::ROBOT_STATE;
use crate::system::wake::MOTOR_WAKE;

#[embassy_executor::task]
pub async fn motor_control(r: MotorDriverResources) {
    let drive = match TrackDrive::new(r) {
        Ok(drive) => drive,
        Err(fault) => {
            error!("motor driver setup failed: {}", fault);
            return;
        }
    };

    info!("Motor control started");
    MotorControl::new(drive, &ROBOT_STATE, &MOTOR_WAKE).run().await
}
