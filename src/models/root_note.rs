//! Root notes the user may pick directly
//!
//! Only the seven natural letters are offered as roots. Sharped pitch classes
//! still appear on the fretboard, but only as transposed chord or scale tones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::errors::CatalogError;
use crate::models::pitch_class::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootNote {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl RootNote {
    /// Picker order, as presented to the user
    pub const ALL: [RootNote; 7] = [
        RootNote::A,
        RootNote::B,
        RootNote::C,
        RootNote::D,
        RootNote::E,
        RootNote::F,
        RootNote::G,
    ];

    pub fn pitch_class(self) -> PitchClass {
        match self {
            RootNote::A => PitchClass::A,
            RootNote::B => PitchClass::B,
            RootNote::C => PitchClass::C,
            RootNote::D => PitchClass::D,
            RootNote::E => PitchClass::E,
            RootNote::F => PitchClass::F,
            RootNote::G => PitchClass::G,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.pitch_class().as_str()
    }
}

impl From<RootNote> for PitchClass {
    fn from(root: RootNote) -> Self {
        root.pitch_class()
    }
}

impl TryFrom<PitchClass> for RootNote {
    type Error = CatalogError;

    fn try_from(pitch_class: PitchClass) -> Result<Self, Self::Error> {
        RootNote::ALL
            .into_iter()
            .find(|root| root.pitch_class() == pitch_class)
            .ok_or_else(|| CatalogError::InvalidRootNote(pitch_class.to_string()))
    }
}

impl fmt::Display for RootNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RootNote {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RootNote::A),
            "B" => Ok(RootNote::B),
            "C" => Ok(RootNote::C),
            "D" => Ok(RootNote::D),
            "E" => Ok(RootNote::E),
            "F" => Ok(RootNote::F),
            "G" => Ok(RootNote::G),
            _ => Err(CatalogError::InvalidRootNote(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_naturals() {
        assert_eq!("A".parse::<RootNote>().unwrap(), RootNote::A);
        assert_eq!("g".parse::<RootNote>().unwrap(), RootNote::G);
    }

    #[test]
    fn test_sharps_are_not_roots() {
        assert_eq!(
            "C#".parse::<RootNote>(),
            Err(CatalogError::InvalidRootNote("C#".to_string()))
        );
        assert!(RootNote::try_from(PitchClass::Fs).is_err());
    }

    #[test]
    fn test_pitch_class_mapping() {
        for root in RootNote::ALL {
            assert!(!root.pitch_class().is_sharp());
            assert_eq!(RootNote::try_from(root.pitch_class()).unwrap(), root);
        }
    }

    #[test]
    fn test_picker_order() {
        let names: Vec<&str> = RootNote::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E", "F", "G"]);
    }
}
