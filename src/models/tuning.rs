//! Open-string pitch classes for a six-string neck
//!
//! String 0 is the top row of the fretboard display, string 5 the bottom row.

use serde::{Deserialize, Serialize};

use crate::models::pitch_class::PitchClass;

pub const STRING_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    pub strings: [PitchClass; STRING_COUNT],
}

impl Tuning {
    /// Standard guitar tuning, top display row first
    pub const STANDARD: Tuning = Tuning {
        strings: [
            PitchClass::E,
            PitchClass::B,
            PitchClass::G,
            PitchClass::D,
            PitchClass::A,
            PitchClass::E,
        ],
    };

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Open pitch class of `string`, or `None` past the last string
    pub fn open_note(&self, string: usize) -> Option<PitchClass> {
        self.strings.get(string).copied()
    }

    /// Pitch class sounding at `fret` on `string`
    pub fn note_at(&self, string: usize, fret: u8) -> Option<PitchClass> {
        self.open_note(string).map(|open| open.transpose(fret as i32))
    }

    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.strings.iter().copied()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_open_strings() {
        let names: Vec<&str> = Tuning::STANDARD.iter().map(|pc| pc.as_str()).collect();
        assert_eq!(names, vec!["E", "B", "G", "D", "A", "E"]);
        assert_eq!(Tuning::default().string_count(), STRING_COUNT);
    }

    #[test]
    fn test_rows_follow_string_index() {
        let tuning = Tuning::STANDARD;
        for (row, open) in tuning.iter().enumerate() {
            assert_eq!(tuning.open_note(row), Some(open));
            assert_eq!(tuning.note_at(row, 0), Some(open));
        }
        assert_eq!(tuning.open_note(0), tuning.open_note(STRING_COUNT - 1));
    }

    #[test]
    fn test_note_at() {
        let tuning = Tuning::STANDARD;
        assert_eq!(tuning.note_at(4, 0), Some(PitchClass::A));
        assert_eq!(tuning.note_at(4, 3), Some(PitchClass::C));
        assert_eq!(tuning.note_at(0, 12), Some(PitchClass::E));
        assert_eq!(tuning.note_at(5, 5), Some(PitchClass::A));
    }

    #[test]
    fn test_missing_string() {
        assert_eq!(Tuning::STANDARD.open_note(6), None);
        assert_eq!(Tuning::STANDARD.note_at(7, 1), None);
    }
}
