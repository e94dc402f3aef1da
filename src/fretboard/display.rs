//! Display category resolution for annotated cells
//!
//! A cell can be root, chord tone and scale tone at once; the renderer shows
//! one dot colour. Precedence is root > chord+scale > chord > scale, and each
//! category is subject to its visibility toggle.

use serde::Serialize;

use crate::fretboard::generator::FretboardCell;
use crate::models::Visibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteCategory {
    Root,
    ChordAndScale,
    Chord,
    Scale,
}

impl NoteCategory {
    /// Palette class for the renderer
    pub fn css_class(&self) -> &'static str {
        match self {
            NoteCategory::Root => "root",
            NoteCategory::ChordAndScale => "chord-scale",
            NoteCategory::Chord => "chord",
            NoteCategory::Scale => "scale",
        }
    }
}

impl FretboardCell {
    /// Category to draw, or `None` when the cell shows no dot
    ///
    /// A root hidden by its toggle hides the whole cell, even when it is also
    /// a chord or scale tone. A chord+scale tone needs both toggles on; with
    /// only the chord toggle on it falls back to `Chord`, with only the scale
    /// toggle on it is hidden.
    pub fn display_category(&self, visibility: &Visibility) -> Option<NoteCategory> {
        if self.is_root {
            return visibility.root.then_some(NoteCategory::Root);
        }

        if self.is_chord_and_scale_tone() && visibility.chord && visibility.scale {
            return Some(NoteCategory::ChordAndScale);
        }
        if self.is_chord_tone && visibility.chord {
            return Some(NoteCategory::Chord);
        }
        if self.is_scale_tone && !self.is_chord_tone && visibility.scale {
            return Some(NoteCategory::Scale);
        }

        None
    }
}
