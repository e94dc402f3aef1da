//! Models module for the fretboard theory core
//!
//! Pitch classes, the chord/scale catalog, the tuning model and the
//! user selection the fretboard generator reads from.

pub mod catalog;
pub mod chord;
pub mod errors;
pub mod pitch_class;
pub mod root_note;
pub mod scale;
pub mod selection;
pub mod tuning;

// Re-export commonly used types
pub use catalog::{chord_intervals, scale_def, CatalogListing};
pub use chord::ChordType;
pub use errors::{CatalogError, CatalogKind};
pub use pitch_class::{PitchClass, PitchClassSet};
pub use root_note::RootNote;
pub use scale::{ScaleDefinition, ScaleType};
pub use selection::{Selection, Visibility};
pub use tuning::{Tuning, STRING_COUNT};
