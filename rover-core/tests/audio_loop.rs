//! Runs the audio task loop against a recording buzzer on the mock time driver.
//!
//! The mock clock is global to the test binary, so the whole sequence lives in
//! a single test.

use core::cell::RefCell;
use core::future::Future;
use core::pin::{pin, Pin};

use embassy_futures::poll_once;
use embassy_time::{Duration, MockDriver};
use rover_core::audio::note::{Beat, PlayTone, Song};
use rover_core::audio::songs::{CONNECTED_SONG, FINISHED_SONG, MAIN_THEME};
use rover_core::audio::{AudioControl, THEME_NOTE_GAP};
use rover_core::state::SharedState;
use rover_core::Wake;

struct ToneLog<'a>(&'a RefCell<Vec<u16>>);

impl PlayTone for ToneLog<'_> {
    fn play_tone(&mut self, freq: u16) {
        self.0.borrow_mut().push(freq);
    }
}

fn beat_length(beat: &Beat) -> Duration {
    match beat {
        Beat::Note { duration, .. } => *duration,
        Beat::Rest(duration) => *duration,
    }
}

/// Tones the buzzer receives for one complete playback of `song`
fn tones_of(song: &Song) -> Vec<u16> {
    let mut tones: Vec<u16> = song
        .iter()
        .map(|beat| match beat {
            Beat::Note { tone, .. } => *tone,
            Beat::Rest(_) => 0,
        })
        .collect();
    tones.push(0);
    tones
}

fn step<F: Future>(task: &mut Pin<&mut F>) {
    assert!(poll_once(task.as_mut()).is_pending());
}

/// Lets the mock clock run through every beat of `song`. The first beat must
/// already be sounding.
fn play_through<F: Future>(task: &mut Pin<&mut F>, song: &Song) {
    for beat in song {
        MockDriver::get().advance(beat_length(beat));
        step(task);
    }
}

#[test]
fn audio_task_plays_each_cue_once_then_the_theme() {
    let state = SharedState::new();
    let wake = Wake::new();
    let tones = RefCell::new(Vec::new());

    let mut audio = AudioControl::new(ToneLog(&tones), &state, &wake);
    let mut task = pin!(audio.run());

    // silent until the first milestone wake, however long it takes
    step(&mut task);
    MockDriver::get().advance(Duration::from_secs(10));
    step(&mut task);
    assert!(tones.borrow().is_empty());

    // first CONNECTED: the whole connected cue, ending silent
    state.mark_connected();
    wake.signal(());
    step(&mut task);
    play_through(&mut task, &CONNECTED_SONG);
    assert_eq!(*tones.borrow(), tones_of(&CONNECTED_SONG));
    tones.borrow_mut().clear();

    // a repeated CONNECTED wakes the task again but only advances the theme
    state.mark_connected();
    wake.signal(());
    step(&mut task);
    assert_eq!(*tones.borrow(), [tone_at(0)]);
    play_through(&mut task, &MAIN_THEME[0..1]);
    assert_eq!(*tones.borrow(), [tone_at(0), 0]);
    tones.borrow_mut().clear();

    // without any signal, the end of the gap plays the next theme note
    MockDriver::get().advance(THEME_NOTE_GAP);
    step(&mut task);
    assert_eq!(*tones.borrow(), [tone_at(1)]);
    play_through(&mut task, &MAIN_THEME[1..2]);
    tones.borrow_mut().clear();

    // run finished: the finished cue preempts the gap
    state.mark_run_finished();
    wake.signal(());
    step(&mut task);
    play_through(&mut task, &FINISHED_SONG);
    assert_eq!(*tones.borrow(), tones_of(&FINISHED_SONG));
    tones.borrow_mut().clear();

    // and the theme resumes where it left off
    MockDriver::get().advance(THEME_NOTE_GAP);
    step(&mut task);
    assert_eq!(*tones.borrow(), [tone_at(2)]);
}

fn tone_at(index: usize) -> u16 {
    match MAIN_THEME[index] {
        Beat::Note { tone, .. } => tone,
        Beat::Rest(_) => 0,
    }
}
