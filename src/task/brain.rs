//! Brain Task
//!
//! Sole consumer of the receive queue. Runs on the interrupt executor, one
//! priority tier above the indicator and audio tasks, so a busy buzzer or LED
//! row never delays a drive command.

use defmt::info;
use rover_core::dispatch::Brain;

use crate::system::link::RX_QUEUE;
use crate::system::state::ROBOT_STATE;
use crate::system::wake::{AUDIO_WAKE, BRAIN_WAKE, MOTOR_WAKE};

#[embassy_executor::task]
pub async fn brain() {
    info!("Brain started");
    let brain = Brain::new(&ROBOT_STATE, &MOTOR_WAKE, &AUDIO_WAKE);
    brain.run(&RX_QUEUE, &BRAIN_WAKE).await
}
