//! Note summaries for the side panels
//!
//! `CurrentNotes` lists the notes of the selected chord and scale;
//! `NoteInfo` describes a single highlighted cell for hover display.

use serde::Serialize;

use crate::fretboard::generator::FretboardCell;
use crate::models::{PitchClass, Selection, Tuning};

/// Labelled list of notes, in interval order from the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteGroup {
    pub label: String,
    pub notes: Vec<PitchClass>,
}

/// Notes of the currently selected chord and scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentNotes {
    pub chord: Option<NoteGroup>,
    pub scale: Option<NoteGroup>,
}

impl CurrentNotes {
    pub fn from_selection(selection: &Selection) -> Self {
        let Some(root) = selection.root else {
            return CurrentNotes {
                chord: None,
                scale: None,
            };
        };

        CurrentNotes {
            chord: selection.chord.map(|chord| NoteGroup {
                label: format!("{} {}", root, chord),
                notes: chord.notes(root.pitch_class()),
            }),
            scale: selection.scale.map(|scale| NoteGroup {
                label: format!("{} {}", root, scale),
                notes: scale.notes(root.pitch_class()),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chord.is_none() && self.scale.is_none()
    }
}

/// Details about one highlighted cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteInfo {
    pub note: PitchClass,
    pub fret: u8,
    /// Open note of the string, used as its name
    pub string_name: PitchClass,
    pub scale_position: Option<u8>,
    pub mode: Option<&'static str>,
    /// e.g. "A Major" when the cell is a tone of the selected chord
    pub chord_label: Option<String>,
    pub is_root: bool,
}

impl NoteInfo {
    /// Info for chord or scale tones; `None` for anything else
    ///
    /// `chord_label` names the selected root and chord ("A Major"), not the
    /// hovered note, so every tone of one chord carries the same label.
    pub fn for_cell(cell: &FretboardCell, tuning: &Tuning, selection: &Selection) -> Option<NoteInfo> {
        if !cell.is_chord_tone && !cell.is_scale_tone {
            return None;
        }

        let chord_label = match (cell.is_chord_tone, selection.root, selection.chord) {
            (true, Some(root), Some(chord)) => Some(format!("{} {}", root, chord)),
            _ => None,
        };

        Some(NoteInfo {
            note: cell.note,
            fret: cell.fret,
            string_name: tuning.open_note(cell.string)?,
            scale_position: cell.scale_degree.map(|degree| degree.position),
            mode: cell.scale_degree.map(|degree| degree.mode),
            chord_label,
            is_root: cell.is_root,
        })
    }
}
