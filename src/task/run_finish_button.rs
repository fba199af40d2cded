//! Run finish button
//!
//! The operator presses this button at the end of a run. It sets the
//! run-finished flag once and wakes the audio task for the finished cue.

use defmt::info;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::Timer;

use crate::system::config::DEBOUNCE_DURATION;
use crate::system::resources::RunFinishButtonResources;
use crate::system::state::ROBOT_STATE;
use crate::system::wake::AUDIO_WAKE;

#[embassy_executor::task]
pub async fn run_finish_button(r: RunFinishButtonResources) {
    // active low, the button pulls the pin to ground
    let mut button = Input::new(r.button_pin, Pull::Up);

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(DEBOUNCE_DURATION).await;

        // released again within the debounce time, just a bounce
        if button.is_high() {
            continue;
        }

        if ROBOT_STATE.mark_run_finished() {
            info!("Run finished");
            AUDIO_WAKE.signal(());
        }

        button.wait_for_high().await;
    }
}
