//! Fretboard WASM API
//!
//! This module provides the JavaScript-facing API for the fretboard explorer.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging macros, serde conversion and argument validation
//! - `types`: Result shapes handed to the page
//! - `fretboard`: Exported fretboard, catalog and config operations

pub mod helpers;
pub mod types;
pub mod fretboard;

pub use fretboard::{
    default_selection, describe_note, generate_fretboard, generate_fretboard_json, get_catalog,
    get_chord_notes, get_current_notes, get_scale_notes, load_config,
};
