//! Fretboard operations exposed to JavaScript
//!
//! Every function is stateless: the page passes its current selection in and
//! gets freshly computed data back.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, validate_fret_count, validate_position, validation_error};
use crate::api::types::{FretboardView, InitialState};
use crate::config::FretboardConfig;
use crate::fretboard::{generate, CurrentNotes, NoteInfo};
use crate::models::{catalog, ChordType, RootNote, ScaleType, Selection, Tuning};
use crate::{wasm_error, wasm_info, wasm_log};

/// Selection from JS, falling back to the session default for null/undefined
fn selection_from_js(selection_js: JsValue) -> Result<Selection, JsValue> {
    if selection_js.is_null() || selection_js.is_undefined() {
        return Ok(Selection::default());
    }
    deserialize(selection_js, "Selection deserialization error")
}

/// Generate the annotated fretboard for a selection
///
/// # Parameters
/// - `selection_js`: Selection object (`root`, `chord`, `scale`, `visibility`)
/// - `fret_count`: Highest fret to include (1-24)
///
/// # Returns
/// JavaScript object with `string_names`, `frets` (inlay markers) and
/// `strings` (one array of cells per string, each with its display `category`)
#[wasm_bindgen(js_name = generateFretboard)]
pub fn generate_fretboard(selection_js: JsValue, fret_count: u8) -> Result<JsValue, JsValue> {
    wasm_info!("generateFretboard called: fret_count={}", fret_count);

    validate_fret_count(fret_count).map_err(validation_error)?;
    let selection = selection_from_js(selection_js)?;
    wasm_log!(
        "  root={:?}, chord={:?}, scale={:?}",
        selection.root,
        selection.chord,
        selection.scale
    );

    let tuning = Tuning::STANDARD;
    let board = generate(&tuning, fret_count, &selection);
    let view = FretboardView::new(board, &tuning, &selection);

    serialize(&view, "Fretboard serialization error")
}

/// Generate the raw cell grid as a JSON string
#[wasm_bindgen(js_name = generateFretboardJson)]
pub fn generate_fretboard_json(selection_js: JsValue, fret_count: u8) -> Result<String, JsValue> {
    validate_fret_count(fret_count).map_err(validation_error)?;
    let selection = selection_from_js(selection_js)?;
    let board = generate(&Tuning::STANDARD, fret_count, &selection);

    serde_json::to_string(&board).map_err(|e| {
        wasm_error!("JSON serialization error: {}", e);
        JsValue::from_str(&format!("JSON serialization error: {}", e))
    })
}

/// All picker options: root letters, chords and scales with their tables
#[wasm_bindgen(js_name = getCatalog)]
pub fn get_catalog() -> Result<JsValue, JsValue> {
    serialize(&catalog::listing(), "Catalog serialization error")
}

/// Notes of a chord by root letter and chord name, in interval order
#[wasm_bindgen(js_name = getChordNotes)]
pub fn get_chord_notes(root: &str, chord: &str) -> Result<JsValue, JsValue> {
    wasm_info!("getChordNotes called: root='{}', chord='{}'", root, chord);

    let root = root.parse::<RootNote>().map_err(|e| validation_error(e.to_string()))?;
    let chord = ChordType::from_name(chord).map_err(|e| validation_error(e.to_string()))?;

    serialize(&chord.notes(root.pitch_class()), "Chord notes serialization error")
}

/// Notes of a scale by root letter and scale name, in interval order
#[wasm_bindgen(js_name = getScaleNotes)]
pub fn get_scale_notes(root: &str, scale: &str) -> Result<JsValue, JsValue> {
    wasm_info!("getScaleNotes called: root='{}', scale='{}'", root, scale);

    let root = root.parse::<RootNote>().map_err(|e| validation_error(e.to_string()))?;
    let scale = ScaleType::from_name(scale).map_err(|e| validation_error(e.to_string()))?;

    serialize(&scale.notes(root.pitch_class()), "Scale notes serialization error")
}

/// Labelled chord and scale note lists for the current selection
#[wasm_bindgen(js_name = getCurrentNotes)]
pub fn get_current_notes(selection_js: JsValue) -> Result<JsValue, JsValue> {
    let selection = selection_from_js(selection_js)?;
    serialize(&CurrentNotes::from_selection(&selection), "Current notes serialization error")
}

/// Hover details for one position
///
/// # Returns
/// A NoteInfo object, or `undefined` when the position is neither a chord nor a
/// scale tone
#[wasm_bindgen(js_name = describeNote)]
pub fn describe_note(selection_js: JsValue, string: usize, fret: u8) -> Result<JsValue, JsValue> {
    let selection = selection_from_js(selection_js)?;
    let tuning = Tuning::STANDARD;
    validate_position(string, fret, tuning.string_count(), crate::config::MAX_FRET_COUNT)
        .map_err(validation_error)?;

    let board = generate(&tuning, fret, &selection);
    let info = board
        .cell(string, fret)
        .and_then(|cell| NoteInfo::for_cell(cell, &tuning, &selection));

    serialize(&info, "Note info serialization error")
}

/// Selection the session starts with when no config is supplied
#[wasm_bindgen(js_name = defaultSelection)]
pub fn default_selection() -> Result<JsValue, JsValue> {
    serialize(&Selection::default(), "Selection serialization error")
}

/// Parse a YAML config and return the startup fret count and selection
#[wasm_bindgen(js_name = loadConfig)]
pub fn load_config(yaml: &str) -> Result<JsValue, JsValue> {
    wasm_info!("loadConfig called: {} bytes", yaml.len());

    let config = FretboardConfig::from_yaml_str(yaml).map_err(|e| validation_error(e.to_string()))?;
    let state = InitialState {
        fret_count: config.fret_count,
        selection: config.initial_selection(),
    };

    serialize(&state, "Config serialization error")
}
