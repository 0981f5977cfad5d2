//! Instrument and sound vocabulary.
//!
//! Each instrument owns its own closed set of sounds. Names are matched
//! exactly, case included.

/// Known instruments and the sounds each one accepts.
pub const INSTRUMENTS: &[(&str, &[&str])] = &[
    ("Drum", DRUM_SOUNDS),
    ("Triangle", TRIANGLE_SOUNDS),
];

pub const DRUM_SOUNDS: &[&str] = &["boom", "clap", "tsst", "crash", "rest", "dun"];

pub const TRIANGLE_SOUNDS: &[&str] = &["ding", "diding", "dididing"];

/// Sounds accepted by `instrument`, or `None` if the instrument is unknown.
pub fn sounds_for(instrument: &str) -> Option<&'static [&'static str]> {
    INSTRUMENTS
        .iter()
        .find(|(name, _)| *name == instrument)
        .map(|(_, sounds)| *sounds)
}
