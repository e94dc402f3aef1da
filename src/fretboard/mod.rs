//! Fretboard module
//!
//! Generates the annotated (string, fret) grid and the derived views the
//! presentation layer draws from it.

pub mod classifier;
pub mod display;
pub mod generator;
pub mod inlays;
pub mod summary;

pub use classifier::{classify_scale_degree, ScaleDegree};
pub use display::NoteCategory;
pub use generator::{generate, generate_default, Fretboard, FretboardCell, DEFAULT_FRET_COUNT};
pub use inlays::{fret_marker, FretMarker};
pub use summary::{CurrentNotes, NoteGroup, NoteInfo};
