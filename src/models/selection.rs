//! Current user selection: root, chord, scale and visibility toggles
//!
//! Plain data. Nothing here computes annotations; the fretboard generator reads
//! a snapshot of the selection each time it runs.

use serde::{Deserialize, Serialize};

use crate::models::chord::ChordType;
use crate::models::pitch_class::PitchClass;
use crate::models::root_note::RootNote;
use crate::models::scale::ScaleType;

/// Per-category visibility toggles (root / chord / scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub root: bool,
    pub chord: bool,
    pub scale: bool,
}

impl Visibility {
    pub const ALL_VISIBLE: Visibility = Visibility {
        root: true,
        chord: true,
        scale: true,
    };

    pub fn toggle_root(&mut self) {
        self.root = !self.root;
    }

    pub fn toggle_chord(&mut self) {
        self.chord = !self.chord;
    }

    pub fn toggle_scale(&mut self) {
        self.scale = !self.scale;
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::ALL_VISIBLE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub root: Option<RootNote>,
    pub chord: Option<ChordType>,
    pub scale: Option<ScaleType>,
    pub visibility: Visibility,
}

impl Selection {
    /// Session start state: root A, nothing else selected, everything visible
    pub fn new() -> Self {
        Selection {
            root: Some(RootNote::A),
            chord: None,
            scale: None,
            visibility: Visibility::ALL_VISIBLE,
        }
    }

    /// No root, chord or scale
    pub fn empty() -> Self {
        Selection {
            root: None,
            ..Selection::new()
        }
    }

    pub fn with_root(mut self, root: impl Into<Option<RootNote>>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_chord(mut self, chord: impl Into<Option<ChordType>>) -> Self {
        self.chord = chord.into();
        self
    }

    pub fn with_scale(mut self, scale: impl Into<Option<ScaleType>>) -> Self {
        self.scale = scale.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn set_root(&mut self, root: Option<RootNote>) {
        self.root = root;
    }

    pub fn set_chord(&mut self, chord: Option<ChordType>) {
        self.chord = chord;
    }

    pub fn set_scale(&mut self, scale: Option<ScaleType>) {
        self.scale = scale;
    }

    pub fn root_pitch_class(&self) -> Option<PitchClass> {
        self.root.map(RootNote::pitch_class)
    }

    /// Chord tones in interval order; empty unless both root and chord are set
    pub fn chord_notes(&self) -> Vec<PitchClass> {
        match (self.root_pitch_class(), self.chord) {
            (Some(root), Some(chord)) => chord.notes(root),
            _ => Vec::new(),
        }
    }

    /// Scale tones in interval order; empty unless both root and scale are set
    pub fn scale_notes(&self) -> Vec<PitchClass> {
        match (self.root_pitch_class(), self.scale) {
            (Some(root), Some(scale)) => scale.notes(root),
            _ => Vec::new(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.root, Some(RootNote::A));
        assert_eq!(selection.chord, None);
        assert_eq!(selection.scale, None);
        assert_eq!(selection.visibility, Visibility::ALL_VISIBLE);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut visibility = Visibility::default();
        visibility.toggle_chord();
        assert!(visibility.root);
        assert!(!visibility.chord);
        assert!(visibility.scale);
        visibility.toggle_chord();
        assert_eq!(visibility, Visibility::ALL_VISIBLE);
    }

    #[test]
    fn test_chord_without_root_has_no_notes() {
        let selection = Selection::empty().with_chord(ChordType::Major7);
        assert!(selection.chord_notes().is_empty());
        assert!(selection.scale_notes().is_empty());
    }

    #[test]
    fn test_clearing_chord() {
        let mut selection = Selection::new().with_chord(ChordType::Minor);
        assert_eq!(selection.chord_notes().len(), 3);
        selection.set_chord(None);
        assert!(selection.chord_notes().is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let selection = Selection::new()
            .with_root(RootNote::D)
            .with_chord(ChordType::Sus2)
            .with_scale(ScaleType::Dorian);
        let json = serde_json::to_string(&selection).unwrap();
        let parsed: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, selection);
    }

    #[test]
    fn test_deserialize_partial() {
        let parsed: Selection =
            serde_json::from_str(r#"{"root":"E","scale":"Blues"}"#).unwrap();
        assert_eq!(parsed.root, Some(RootNote::E));
        assert_eq!(parsed.chord, None);
        assert_eq!(parsed.scale, Some(ScaleType::Blues));
        assert!(parsed.visibility.scale);

        let cleared: Selection = serde_json::from_str(r#"{"root":null}"#).unwrap();
        assert_eq!(cleared.root, None);
    }
}
