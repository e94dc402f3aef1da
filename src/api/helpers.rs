//! Shared helpers for WASM API operations
//!
//! Console logging, serde conversion across the JS boundary, and argument
//! validation used by every exported function.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{MAX_FRET_COUNT, MIN_FRET_COUNT};

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate the number of frets requested by the page
pub fn validate_fret_count(fret_count: u8) -> Result<(), String> {
    if !(MIN_FRET_COUNT..=MAX_FRET_COUNT).contains(&fret_count) {
        return Err(format!(
            "Invalid fret count: {} (must be {}-{})",
            fret_count, MIN_FRET_COUNT, MAX_FRET_COUNT
        ));
    }
    Ok(())
}

/// Validate that a (string, fret) position exists on the generated grid
pub fn validate_position(string: usize, fret: u8, string_count: usize, fret_count: u8) -> Result<(), String> {
    if string >= string_count {
        return Err(format!(
            "String index {} out of bounds (max: {})",
            string,
            string_count.saturating_sub(1)
        ));
    }
    if fret > fret_count {
        return Err(format!("Fret {} out of bounds (max: {})", fret, fret_count));
    }
    Ok(())
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation or lookup error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fret_count() {
        assert!(validate_fret_count(12).is_ok());
        assert!(validate_fret_count(24).is_ok());
        assert!(validate_fret_count(0).is_err());
        assert!(validate_fret_count(25).is_err());
    }

    #[test]
    fn test_validate_position() {
        assert!(validate_position(5, 12, 6, 12).is_ok());
        assert_eq!(
            validate_position(6, 0, 6, 12),
            Err("String index 6 out of bounds (max: 5)".to_string())
        );
        assert!(validate_position(0, 13, 6, 12).is_err());
    }
}
