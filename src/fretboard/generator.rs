//! Fretboard generation
//!
//! Turns a tuning, a fret count and a selection snapshot into a grid of
//! annotated cells: one row per string, one cell per fret from the open
//! string (fret 0) up to and including `fret_count`.
//!
//! Generation is a pure function of its inputs. Chord and scale annotation is
//! gated on a selected root: without one, every cell is a plain note.

use serde::Serialize;

use crate::fretboard::classifier::{classify_scale_degree, ScaleDegree};
use crate::models::{PitchClass, PitchClassSet, Selection, Tuning};

/// Frets shown by default (one octave)
pub const DEFAULT_FRET_COUNT: u8 = 12;

/// One (string, fret) position and how it relates to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretboardCell {
    pub string: usize,
    pub fret: u8,
    pub note: PitchClass,
    pub is_root: bool,
    pub is_chord_tone: bool,
    pub is_scale_tone: bool,
    /// Present only for scale tones
    pub scale_degree: Option<ScaleDegree>,
}

impl FretboardCell {
    /// True when the cell belongs to both the selected chord and scale
    pub fn is_chord_and_scale_tone(&self) -> bool {
        self.is_chord_tone && self.is_scale_tone
    }

    /// True when any annotation applies
    pub fn is_highlighted(&self) -> bool {
        self.is_root || self.is_chord_tone || self.is_scale_tone
    }
}

/// Annotated grid, strings in tuning order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fretboard {
    strings: Vec<Vec<FretboardCell>>,
}

impl Fretboard {
    pub fn strings(&self) -> &[Vec<FretboardCell>] {
        &self.strings
    }

    pub fn string(&self, string: usize) -> Option<&[FretboardCell]> {
        self.strings.get(string).map(Vec::as_slice)
    }

    pub fn cell(&self, string: usize, fret: u8) -> Option<&FretboardCell> {
        self.strings.get(string)?.get(fret as usize)
    }

    /// All cells, string by string
    pub fn cells(&self) -> impl Iterator<Item = &FretboardCell> {
        self.strings.iter().flatten()
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Highest fret number in the grid
    pub fn fret_count(&self) -> u8 {
        self.strings
            .first()
            .map(|row| row.len().saturating_sub(1) as u8)
            .unwrap_or(0)
    }

    pub fn into_strings(self) -> Vec<Vec<FretboardCell>> {
        self.strings
    }
}

/// Pitch-class sets a selection highlights, computed once per generation
#[derive(Debug, Clone, Copy, Default)]
struct Highlights {
    root: Option<PitchClass>,
    chord: PitchClassSet,
    scale: PitchClassSet,
}

impl Highlights {
    fn from_selection(selection: &Selection) -> Self {
        let Some(root) = selection.root_pitch_class() else {
            return Highlights::default();
        };

        Highlights {
            root: Some(root),
            chord: selection
                .chord
                .map(|chord| chord.note_set(root))
                .unwrap_or_default(),
            scale: selection
                .scale
                .map(|scale| scale.note_set(root))
                .unwrap_or_default(),
        }
    }
}

/// Build the annotated fretboard for `selection`
pub fn generate(tuning: &Tuning, fret_count: u8, selection: &Selection) -> Fretboard {
    log::debug!(
        "generate: frets=0..={}, root={:?}, chord={:?}, scale={:?}",
        fret_count,
        selection.root,
        selection.chord,
        selection.scale
    );

    let highlights = Highlights::from_selection(selection);

    let strings = tuning
        .iter()
        .enumerate()
        .map(|(string, open)| {
            (0..=fret_count)
                .map(|fret| annotate(string, fret, open.transpose(fret as i32), &highlights, selection))
                .collect::<Vec<_>>()
        })
        .collect();

    Fretboard { strings }
}

/// Standard tuning, default fret count
pub fn generate_default(selection: &Selection) -> Fretboard {
    generate(&Tuning::STANDARD, DEFAULT_FRET_COUNT, selection)
}

fn annotate(
    string: usize,
    fret: u8,
    note: PitchClass,
    highlights: &Highlights,
    selection: &Selection,
) -> FretboardCell {
    let is_root = highlights.root == Some(note);
    let is_chord_tone = highlights.chord.contains(note);
    let is_scale_tone = highlights.scale.contains(note);

    let scale_degree = match (is_scale_tone, highlights.root, selection.scale) {
        (true, Some(root), Some(scale)) => classify_scale_degree(note, root, scale),
        _ => None,
    };

    FretboardCell {
        string,
        fret,
        note,
        is_root,
        is_chord_tone,
        is_scale_tone,
        scale_degree,
    }
}
