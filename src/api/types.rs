//! Shared types for the WASM API
//!
//! Result shapes handed to the page, built from the core fretboard types.

use serde::Serialize;

use crate::fretboard::{fret_marker, Fretboard, FretMarker, FretboardCell, NoteCategory, ScaleDegree};
use crate::models::{PitchClass, Selection, Tuning, Visibility};

/// A cell plus the dot category the page should draw for it
///
/// Keep this a plain struct: `#[serde(flatten)]` would serialize it as a map,
/// and JS would receive a `Map` instead of an object.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RenderedCell {
    pub string: usize,
    pub fret: u8,
    pub note: PitchClass,
    pub is_root: bool,
    pub is_chord_tone: bool,
    pub is_scale_tone: bool,
    pub scale_degree: Option<ScaleDegree>,
    pub category: Option<NoteCategory>,
}

impl RenderedCell {
    pub fn new(cell: &FretboardCell, visibility: &Visibility) -> Self {
        RenderedCell {
            string: cell.string,
            fret: cell.fret,
            note: cell.note,
            is_root: cell.is_root,
            is_chord_tone: cell.is_chord_tone,
            is_scale_tone: cell.is_scale_tone,
            scale_degree: cell.scale_degree,
            category: cell.display_category(visibility),
        }
    }
}

/// Fret number and its inlay, if any
#[derive(Serialize, Clone, Debug)]
pub struct FretHeader {
    pub fret: u8,
    pub marker: Option<FretMarker>,
}

/// Everything the page needs to draw the neck
#[derive(Serialize, Clone, Debug)]
pub struct FretboardView {
    pub string_names: Vec<PitchClass>,
    pub frets: Vec<FretHeader>,
    pub strings: Vec<Vec<RenderedCell>>,
}

impl FretboardView {
    pub fn new(board: Fretboard, tuning: &Tuning, selection: &Selection) -> Self {
        let frets = (0..=board.fret_count())
            .map(|fret| FretHeader {
                fret,
                marker: fret_marker(fret),
            })
            .collect();

        let strings = board
            .into_strings()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|cell| RenderedCell::new(cell, &selection.visibility))
                    .collect()
            })
            .collect();

        FretboardView {
            string_names: tuning.iter().collect(),
            frets,
            strings,
        }
    }
}

/// Startup state derived from a config
#[derive(Serialize, Clone, Debug)]
pub struct InitialState {
    pub fret_count: u8,
    pub selection: Selection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::generate_default;
    use crate::models::{ChordType, ScaleType};

    #[test]
    fn test_view_shape_and_categories() {
        let selection = Selection::new()
            .with_chord(ChordType::Major)
            .with_scale(ScaleType::Major);
        let board = generate_default(&selection);
        let view = FretboardView::new(board, &Tuning::STANDARD, &selection);

        assert_eq!(view.string_names.len(), 6);
        assert_eq!(view.frets.len(), 13);
        assert_eq!(view.frets[12].marker, Some(FretMarker::Double));
        assert_eq!(view.strings[4][0].category, Some(NoteCategory::Root));
        // E is both a chord and a scale tone of A major
        assert_eq!(view.strings[0][0].category, Some(NoteCategory::ChordAndScale));
    }

    #[test]
    fn test_rendered_cell_copies_cell() {
        let selection = Selection::new().with_scale(ScaleType::Major);
        let board = generate_default(&selection);
        let cell = board.cell(1, 0).unwrap();
        let rendered = RenderedCell::new(cell, &selection.visibility);

        assert_eq!(rendered.string, 1);
        assert_eq!(rendered.fret, 0);
        assert_eq!(rendered.note, PitchClass::B);
        assert!(rendered.is_scale_tone);
        assert_eq!(rendered.scale_degree, cell.scale_degree);
        assert_eq!(rendered.category, Some(NoteCategory::Scale));
    }

    #[test]
    fn test_rendered_cell_is_flat() {
        let selection = Selection::new();
        let board = generate_default(&selection);
        let view = FretboardView::new(board, &Tuning::STANDARD, &selection);
        let json = serde_json::to_value(&view.strings[4][0]).unwrap();
        assert_eq!(json["note"], "A");
        assert_eq!(json["category"], "root");
        assert_eq!(json["fret"], 0);
    }
}
