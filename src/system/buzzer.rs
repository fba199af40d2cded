//! PWM piezo buzzer
//!
//! Tones are produced by retuning the PWM period to the note frequency at 50%
//! duty. A frequency of 0 drops the duty to zero.

use embassy_rp::pwm::{self, Pwm};
use rover_core::audio::note::PlayTone;

use crate::system::pwm::pwm_timing;
use crate::system::resources::BuzzerResources;

pub struct Buzzer {
    pwm: Pwm<'static>,
    config: pwm::Config,
}

impl Buzzer {
    pub fn new(r: BuzzerResources) -> Self {
        let mut config = pwm::Config::default();
        config.compare_a = 0;
        let pwm = Pwm::new_output_a(r.slice, r.pin, config.clone());
        Self { pwm, config }
    }
}

impl PlayTone for Buzzer {
    fn play_tone(&mut self, freq: u16) {
        if freq == 0 {
            self.config.compare_a = 0;
        } else {
            let (divider, period) = pwm_timing(u32::from(freq));
            self.config.divider = divider.into();
            self.config.top = period;
            self.config.compare_a = period / 2;
        }
        self.pwm.set_config(&self.config);
    }
}
