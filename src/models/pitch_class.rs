//! The 12 chromatic pitch classes in a fixed cyclic order
//!
//! Index 0 is C and index 11 is B. All arithmetic wraps modulo 12, so
//! transposition by any integer interval (negative or larger than an octave)
//! always lands on a valid pitch class.
//!
//! Note: pitch classes are always spelled with sharps (C#, not Db). Flats are
//! accepted when parsing but never produced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::errors::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl PitchClass {
    /// All 12 pitch classes in chromatic order starting from C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Position in the chromatic cycle (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at any integer position, wrapping modulo 12
    pub fn at(index: i32) -> PitchClass {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Shift by `interval` semitones (any sign, any size)
    pub fn transpose(self, interval: i32) -> PitchClass {
        Self::at(self.index() as i32 + interval.rem_euclid(12))
    }

    /// Ascending distance in semitones from `root` up to `self` (0-11)
    pub fn interval_from(self, root: PitchClass) -> u8 {
        ((self.index() as i32 - root.index() as i32 + 12) % 12) as u8
    }

    /// True for the five sharped pitch classes
    pub fn is_sharp(self) -> bool {
        matches!(
            self,
            PitchClass::Cs | PitchClass::Ds | PitchClass::Fs | PitchClass::Gs | PitchClass::As
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

/// `index_of` from the pitch-class table contract
pub fn index_of(pitch_class: PitchClass) -> u8 {
    pitch_class.index()
}

/// `transpose` from the pitch-class table contract
pub fn transpose(pitch_class: PitchClass, interval: i32) -> PitchClass {
    pitch_class.transpose(interval)
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive parsing; flats map onto their sharp equivalents
        match s.trim().to_uppercase().as_str() {
            "C" | "B#" => Ok(PitchClass::C),
            "C#" | "CS" | "C♯" | "DB" | "D♭" => Ok(PitchClass::Cs),
            "D" => Ok(PitchClass::D),
            "D#" | "DS" | "D♯" | "EB" | "E♭" => Ok(PitchClass::Ds),
            "E" | "FB" => Ok(PitchClass::E),
            "F" | "E#" => Ok(PitchClass::F),
            "F#" | "FS" | "F♯" | "GB" | "G♭" => Ok(PitchClass::Fs),
            "G" => Ok(PitchClass::G),
            "G#" | "GS" | "G♯" | "AB" | "A♭" => Ok(PitchClass::Gs),
            "A" => Ok(PitchClass::A),
            "A#" | "AS" | "A♯" | "BB" | "B♭" => Ok(PitchClass::As),
            "B" | "CB" => Ok(PitchClass::B),
            _ => Err(CatalogError::InvalidPitchClass(s.to_string())),
        }
    }
}

/// A set of pitch classes, one bit per chromatic position
///
/// Octave duplicates collapse: inserting the same pitch class twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub const EMPTY: PitchClassSet = PitchClassSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, pitch_class: PitchClass) {
        self.0 |= 1 << pitch_class.index();
    }

    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.0 & (1 << pitch_class.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in chromatic order starting from C
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::ALL.into_iter().filter(move |pc| self.contains(*pc))
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchClassSet::new();
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}
