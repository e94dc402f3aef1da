//! Position inlays drawn under the neck

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FretMarker {
    Single,
    Double,
}

/// Inlay for `fret`: single dots at 3, 5, 7 and 9, a double dot at the octave
pub fn fret_marker(fret: u8) -> Option<FretMarker> {
    match fret {
        3 | 5 | 7 | 9 => Some(FretMarker::Single),
        12 => Some(FretMarker::Double),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        let marked: Vec<u8> = (0..=12).filter(|&f| fret_marker(f).is_some()).collect();
        assert_eq!(marked, vec![3, 5, 7, 9, 12]);
        assert_eq!(fret_marker(12), Some(FretMarker::Double));
        assert_eq!(fret_marker(0), None);
    }
}
