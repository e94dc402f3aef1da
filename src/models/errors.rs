//! Error types for catalog and note lookups
//!
//! All pitch-class arithmetic is total, so the only failures in the theory core
//! come from looking up names that are not part of the closed catalog tables.

use thiserror::Error;

/// Errors raised when a name does not match any catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Chord or scale name not present in the catalog (caller contract violation)
    #[error("Invalid {kind} name: '{name}'")]
    InvalidCatalogKey { kind: CatalogKind, name: String },

    /// Root selection outside the seven natural letters
    #[error("Invalid root note: '{0}'. Expected one of: A, B, C, D, E, F, G")]
    InvalidRootNote(String),

    /// Unparseable pitch class symbol
    #[error("Invalid pitch class: '{0}'. Expected one of: C, C#, D, D#, E, F, F#, G, G#, A, A#, B")]
    InvalidPitchClass(String),
}

/// Which catalog table a failed lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Chord,
    Scale,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Chord => write!(f, "chord"),
            CatalogKind::Scale => write!(f, "scale"),
        }
    }
}
