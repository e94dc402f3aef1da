//! Scale types with their interval and mode tables
//!
//! Every scale pairs an ascending interval list with a mode name per degree.
//! `modes[i]` is the mode obtained by starting the scale on `intervals[i]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::catalog;
use crate::models::errors::CatalogError;
use crate::models::pitch_class::{PitchClass, PitchClassSet};

/// Interval sequence and per-degree mode names of a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleDefinition {
    pub intervals: &'static [u8],
    pub modes: &'static [&'static str],
}

impl ScaleDefinition {
    /// 0-based position of `interval` in the interval list
    pub fn position_of(&self, interval: u8) -> Option<usize> {
        self.intervals.iter().position(|&i| i == interval)
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

static MAJOR: ScaleDefinition = ScaleDefinition {
    intervals: &[0, 2, 4, 5, 7, 9, 11],
    modes: &["Ionian", "Dorian", "Phrygian", "Lydian", "Mixolydian", "Aeolian", "Locrian"],
};

static NATURAL_MINOR: ScaleDefinition = ScaleDefinition {
    intervals: &[0, 2, 3, 5, 7, 8, 10],
    modes: &["Aeolian", "Locrian", "Ionian", "Dorian", "Phrygian", "Lydian", "Mixolydian"],
};

static PENTATONIC_MAJOR: ScaleDefinition = ScaleDefinition {
    intervals: &[0, 2, 4, 7, 9],
    modes: &["Major Pentatonic", "Egyptian", "Blues Minor", "Blues Major", "Minor Pentatonic"],
};

static PENTATONIC_MINOR: ScaleDefinition = ScaleDefinition {
    intervals: &[0, 3, 5, 7, 10],
    modes: &["Minor Pentatonic", "Major Pentatonic", "Egyptian", "Blues Minor", "Blues Major"],
};

static BLUES: ScaleDefinition = ScaleDefinition {
    intervals: &[0, 3, 5, 6, 7, 10],
    modes: &["Blues", "Blues #2", "Blues #3", "Blues #4", "Blues #5", "Blues #6"],
};

static DORIAN: ScaleDefinition = ScaleDefinition {
    intervals: &[0, 2, 3, 5, 7, 9, 10],
    modes: &["Dorian", "Phrygian", "Lydian", "Mixolydian", "Aeolian", "Locrian", "Ionian"],
};

static MIXOLYDIAN: ScaleDefinition = ScaleDefinition {
    intervals: &[0, 2, 4, 5, 7, 9, 10],
    modes: &["Mixolydian", "Aeolian", "Locrian", "Ionian", "Dorian", "Phrygian", "Lydian"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleType {
    #[serde(rename = "Major (Ionian)")]
    Major,
    #[serde(rename = "Natural Minor (Aeolian)")]
    NaturalMinor,
    #[serde(rename = "Pentatonic Major")]
    PentatonicMajor,
    #[serde(rename = "Pentatonic Minor")]
    PentatonicMinor,
    Blues,
    Dorian,
    Mixolydian,
}

impl ScaleType {
    /// Catalog order, as presented in the scale picker
    pub const ALL: [ScaleType; 7] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::PentatonicMajor,
        ScaleType::PentatonicMinor,
        ScaleType::Blues,
        ScaleType::Dorian,
        ScaleType::Mixolydian,
    ];

    /// Display name (also the catalog key)
    pub fn name(&self) -> &'static str {
        match self {
            ScaleType::Major => "Major (Ionian)",
            ScaleType::NaturalMinor => "Natural Minor (Aeolian)",
            ScaleType::PentatonicMajor => "Pentatonic Major",
            ScaleType::PentatonicMinor => "Pentatonic Minor",
            ScaleType::Blues => "Blues",
            ScaleType::Dorian => "Dorian",
            ScaleType::Mixolydian => "Mixolydian",
        }
    }

    pub fn definition(&self) -> &'static ScaleDefinition {
        match self {
            ScaleType::Major => &MAJOR,
            ScaleType::NaturalMinor => &NATURAL_MINOR,
            ScaleType::PentatonicMajor => &PENTATONIC_MAJOR,
            ScaleType::PentatonicMinor => &PENTATONIC_MINOR,
            ScaleType::Blues => &BLUES,
            ScaleType::Dorian => &DORIAN,
            ScaleType::Mixolydian => &MIXOLYDIAN,
        }
    }

    pub fn intervals(&self) -> &'static [u8] {
        self.definition().intervals
    }

    pub fn modes(&self) -> &'static [&'static str] {
        self.definition().modes
    }

    /// Look up a scale by its exact display name
    pub fn from_name(name: &str) -> Result<ScaleType, CatalogError> {
        catalog::lookup_scale(name)
    }

    /// Scale tones above `root`, in interval order
    pub fn notes(&self, root: PitchClass) -> Vec<PitchClass> {
        self.intervals()
            .iter()
            .map(|&interval| root.transpose(interval as i32))
            .collect()
    }

    /// Scale tones above `root` as a membership set
    pub fn note_set(&self, root: PitchClass) -> PitchClassSet {
        self.notes(root).into_iter().collect()
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScaleType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleType::from_name(s)
    }
}
