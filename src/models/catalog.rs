//! Name-keyed access to the chord and scale tables
//!
//! The tables themselves live on `ChordType` and `ScaleType`. This module keeps
//! the display-name lookups the UI pickers rely on, built once per process.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::chord::ChordType;
use crate::models::errors::{CatalogError, CatalogKind};
use crate::models::root_note::RootNote;
use crate::models::scale::{ScaleDefinition, ScaleType};

static CHORDS_BY_NAME: Lazy<HashMap<&'static str, ChordType>> = Lazy::new(|| {
    ChordType::ALL.iter().map(|chord| (chord.name(), *chord)).collect()
});

static SCALES_BY_NAME: Lazy<HashMap<&'static str, ScaleType>> = Lazy::new(|| {
    ScaleType::ALL.iter().map(|scale| (scale.name(), *scale)).collect()
});

pub(crate) fn lookup_chord(name: &str) -> Result<ChordType, CatalogError> {
    CHORDS_BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| CatalogError::InvalidCatalogKey {
            kind: CatalogKind::Chord,
            name: name.to_string(),
        })
}

pub(crate) fn lookup_scale(name: &str) -> Result<ScaleType, CatalogError> {
    SCALES_BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| CatalogError::InvalidCatalogKey {
            kind: CatalogKind::Scale,
            name: name.to_string(),
        })
}

/// Intervals of the chord named `name`
pub fn chord_intervals(name: &str) -> Result<&'static [u8], CatalogError> {
    Ok(lookup_chord(name)?.intervals())
}

/// Definition of the scale named `name`
pub fn scale_def(name: &str) -> Result<&'static ScaleDefinition, CatalogError> {
    Ok(lookup_scale(name)?.definition())
}

/// One scale entry in the exported catalog
#[derive(Debug, Clone, Serialize)]
pub struct ScaleEntry {
    pub name: &'static str,
    pub intervals: &'static [u8],
    pub modes: &'static [&'static str],
}

/// One chord entry in the exported catalog
#[derive(Debug, Clone, Serialize)]
pub struct ChordEntry {
    pub name: &'static str,
    pub intervals: &'static [u8],
}

/// Every option the pickers offer, in picker order
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    pub roots: Vec<&'static str>,
    pub chords: Vec<ChordEntry>,
    pub scales: Vec<ScaleEntry>,
}

pub fn listing() -> CatalogListing {
    CatalogListing {
        roots: RootNote::ALL.iter().map(|root| root.as_str()).collect(),
        chords: ChordType::ALL
            .iter()
            .map(|chord| ChordEntry {
                name: chord.name(),
                intervals: chord.intervals(),
            })
            .collect(),
        scales: ScaleType::ALL
            .iter()
            .map(|scale| {
                let def = scale.definition();
                ScaleEntry {
                    name: scale.name(),
                    intervals: def.intervals,
                    modes: def.modes,
                }
            })
            .collect(),
    }
}
