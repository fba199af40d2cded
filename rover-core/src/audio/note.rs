use embassy_time::Duration;

/// One step of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    /// Tone in Hz held for `duration`
    Note { tone: u16, duration: Duration },
    /// Silence for the given time
    Rest(Duration),
}

pub type Song = [Beat];

/// Generates a tone on the buzzer. A frequency of 0 silences it.
pub trait PlayTone {
    fn play_tone(&mut self, freq: u16);
}

pub const fn note(tone: u16, millis: u64) -> Beat {
    Beat::Note {
        tone,
        duration: Duration::from_millis(millis),
    }
}

pub const fn rest(millis: u64) -> Beat {
    Beat::Rest(Duration::from_millis(millis))
}

pub mod pitch {
    pub const C4: u16 = 262;
    pub const D4: u16 = 294;
    pub const E4: u16 = 330;
    pub const F4: u16 = 349;
    pub const G4: u16 = 392;
    pub const A4: u16 = 440;
    pub const B4: u16 = 494;
    pub const C5: u16 = 523;
    pub const E5: u16 = 659;
    pub const G5: u16 = 784;
    pub const C6: u16 = 1047;
}
