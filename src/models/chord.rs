//! Chord types and their interval tables
//!
//! Each chord is a set of semitone offsets from the root. The first interval
//! is always 0, so the root is always a chord tone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::catalog;
use crate::models::errors::CatalogError;
use crate::models::pitch_class::{PitchClass, PitchClassSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordType {
    Major,
    Minor,
    #[serde(rename = "Dominant 7")]
    Dominant7,
    #[serde(rename = "Minor 7")]
    Minor7,
    #[serde(rename = "Major 7")]
    Major7,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
}

impl ChordType {
    /// Catalog order, as presented in the chord picker
    pub const ALL: [ChordType; 9] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Dominant7,
        ChordType::Minor7,
        ChordType::Major7,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Sus2,
        ChordType::Sus4,
    ];

    /// Display name (also the catalog key)
    pub fn name(&self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Dominant7 => "Dominant 7",
            ChordType::Minor7 => "Minor 7",
            ChordType::Major7 => "Major 7",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Sus2 => "Sus2",
            ChordType::Sus4 => "Sus4",
        }
    }

    /// Semitone offsets from the root, root first
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Sus4 => &[0, 5, 7],
        }
    }

    /// Look up a chord by its exact display name
    pub fn from_name(name: &str) -> Result<ChordType, CatalogError> {
        catalog::lookup_chord(name)
    }

    /// Chord tones above `root`, in interval order
    pub fn notes(&self, root: PitchClass) -> Vec<PitchClass> {
        self.intervals()
            .iter()
            .map(|&interval| root.transpose(interval as i32))
            .collect()
    }

    /// Chord tones above `root` as a membership set
    pub fn note_set(&self, root: PitchClass) -> PitchClassSet {
        self.notes(root).into_iter().collect()
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChordType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChordType::from_name(s)
    }
}
