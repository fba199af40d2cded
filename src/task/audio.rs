//! Audio Task
//!
//! Plays the connected and finished cues once each and the main theme in
//! between, on the PWM buzzer.

use defmt::info;
use rover_core::audio::AudioControl;

use crate::system::buzzer::Buzzer;
use crate::system::resources::BuzzerResources;
use crate::system::state::ROBOT_STATE;
use crate::system::wake::AUDIO_WAKE;

#[embassy_executor::task]
pub async fn audio(r: BuzzerResources) {
    info!("Audio started, waiting for the link");
    AudioControl::new(Buzzer::new(r), &ROBOT_STATE, &AUDIO_WAKE)
        .run()
        .await
}
