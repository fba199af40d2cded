use super::note::pitch::*;
use super::note::{note, rest, Beat};

/// Played once when the link comes up
pub static CONNECTED_SONG: [Beat; 5] = [
    note(C5, 120),
    note(E5, 120),
    note(G5, 120),
    note(C6, 300),
    rest(100),
];

/// Played once when the run is reported finished
pub static FINISHED_SONG: [Beat; 7] = [
    note(G4, 150),
    note(C5, 150),
    note(E5, 150),
    note(G5, 300),
    note(E5, 150),
    note(G5, 600),
    rest(200),
];

/// Number of notes in the main theme
pub const THEME_NOTE_COUNT: usize = 15;

/// Background theme, played one note per wake and repeated endlessly
pub static MAIN_THEME: [Beat; THEME_NOTE_COUNT] = [
    note(E4, 300),
    note(E4, 300),
    note(F4, 300),
    note(G4, 300),
    note(G4, 300),
    note(F4, 300),
    note(E4, 300),
    note(D4, 300),
    note(C4, 300),
    note(C4, 300),
    note(D4, 300),
    note(E4, 300),
    note(E4, 450),
    note(D4, 150),
    note(D4, 600),
];
