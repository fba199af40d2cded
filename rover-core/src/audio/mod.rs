//! Audio Feedback
//!
//! Selects what the buzzer plays on each wake of the audio task, in priority
//! order:
//! 1. the connected cue, the first time the connection flag is seen set
//! 2. the finished cue, the first time the run-finished flag is seen set
//! 3. otherwise the next note of the main theme
//!
//! The flags stay set for the rest of the run, so the conditions are evaluated
//! again on every wake and local latches keep each cue to a single playback.

use core::slice;

use embassy_futures::select::select;
use embassy_time::{Duration, Timer};

use crate::fmt::info;
use crate::state::SharedState;
use crate::Wake;

pub mod note;
pub mod songs;
pub mod tone_player;

use note::{PlayTone, Song};
use songs::{CONNECTED_SONG, FINISHED_SONG, MAIN_THEME};
pub use songs::THEME_NOTE_COUNT;
use tone_player::TonePlayer;

/// Pause between two theme notes, unless a milestone wakes the task earlier
pub const THEME_NOTE_GAP: Duration = Duration::from_millis(50);

/// What to play on one wake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioCue {
    Connected,
    Finished,
    /// Note of the main theme at this index
    Theme(usize),
}

impl AudioCue {
    pub fn song(self) -> &'static Song {
        match self {
            Self::Connected => &CONNECTED_SONG,
            Self::Finished => &FINISHED_SONG,
            Self::Theme(index) => slice::from_ref(&MAIN_THEME[index % THEME_NOTE_COUNT]),
        }
    }
}

/// Cue selection with its once-per-run latches and the theme cursor
#[derive(Debug, Default)]
pub struct Jukebox {
    connected_played: bool,
    finished_played: bool,
    next_note: usize,
}

impl Jukebox {
    pub const fn new() -> Self {
        Self {
            connected_played: false,
            finished_played: false,
            next_note: 0,
        }
    }

    /// Picks the cue for this wake from the current flag values
    pub fn next_cue(&mut self, connected: bool, run_finished: bool) -> AudioCue {
        if connected && !self.connected_played {
            self.connected_played = true;
            AudioCue::Connected
        } else if run_finished && !self.finished_played {
            self.finished_played = true;
            AudioCue::Finished
        } else {
            let index = self.next_note;
            self.next_note = (index + 1) % THEME_NOTE_COUNT;
            AudioCue::Theme(index)
        }
    }
}

/// Audio task state: player, cue selection and the wake it listens on
pub struct AudioControl<'a, D: PlayTone> {
    player: TonePlayer<D>,
    jukebox: Jukebox,
    state: &'a SharedState,
    wake: &'a Wake,
}

impl<'a, D: PlayTone> AudioControl<'a, D> {
    pub fn new(audio_driver: D, state: &'a SharedState, wake: &'a Wake) -> Self {
        Self {
            player: TonePlayer::new(audio_driver),
            jukebox: Jukebox::new(),
            state,
            wake,
        }
    }

    /// Runs the audio task forever.
    ///
    /// Silent until the first milestone wake. From then on every wake is either
    /// a milestone signal or the end of the gap after the previous theme note.
    pub async fn run(&mut self) -> ! {
        self.wake.wait().await;
        loop {
            let cue = self
                .jukebox
                .next_cue(self.state.is_connected(), self.state.is_run_finished());
            if !matches!(cue, AudioCue::Theme(_)) {
                info!("audio cue {:?}", cue);
            }
            self.player.play_song(cue.song()).await;

            select(self.wake.wait(), Timer::after(THEME_NOTE_GAP)).await;
        }
    }
}
