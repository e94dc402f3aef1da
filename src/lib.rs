//! Guitar Fretboard WASM Module
//!
//! Music-theory core for the fretboard explorer: pitch-class arithmetic, the
//! chord/scale catalog, and generation of the annotated fretboard grid the
//! page renders.

pub mod api;
pub mod config;
pub mod fretboard;
pub mod models;

// Re-export commonly used types
pub use config::{ConfigError, FretboardConfig};
pub use fretboard::{generate, generate_default, Fretboard, FretboardCell, NoteCategory, ScaleDegree};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Fretboard WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
