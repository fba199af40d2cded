use embassy_time::Timer;

use super::note::{Beat, PlayTone, Song};

/// Plays songs beat by beat on a tone generator
pub struct TonePlayer<D: PlayTone> {
    audio_driver: D,
}

impl<D: PlayTone> TonePlayer<D> {
    pub fn new(audio_driver: D) -> Self {
        Self { audio_driver }
    }

    /// Plays every beat of `song` and leaves the buzzer silent afterwards
    pub async fn play_song(&mut self, song: &Song) {
        for beat in song.iter() {
            match beat {
                Beat::Note { tone, duration } => {
                    self.audio_driver.play_tone(*tone);
                    Timer::after(*duration).await;
                }
                Beat::Rest(duration) => {
                    self.audio_driver.play_tone(0);
                    Timer::after(*duration).await;
                }
            }
        }

        self.audio_driver.play_tone(0);
    }
}
