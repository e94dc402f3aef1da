//! Scale-degree and mode labels for matched notes
//!
//! A note's degree is found from its ascending interval above the root. The
//! generator only classifies notes that are already members of the scale's
//! note set, and that set is built from the same interval list, so the
//! position lookup cannot miss there.

use serde::Serialize;

use crate::models::{PitchClass, ScaleType};

/// 1-based degree of a scale tone and the mode that starts on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleDegree {
    pub position: u8,
    pub mode: &'static str,
}

/// Degree and mode of `note` in `scale` built on `root`; `None` for non-members
pub fn classify_scale_degree(
    note: PitchClass,
    root: PitchClass,
    scale: ScaleType,
) -> Option<ScaleDegree> {
    let definition = scale.definition();
    let relative_interval = note.interval_from(root);
    let position = definition.position_of(relative_interval)?;

    Some(ScaleDegree {
        position: position as u8 + 1,
        mode: definition.modes[position],
    })
}
