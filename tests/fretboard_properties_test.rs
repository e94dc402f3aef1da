// Fretboard generation properties
//
// End-to-end checks of the theory core through the public crate surface:
// pitch-class closure, chord/scale contents, degree labels, grid shape and
// the root-gating rule.

use fretboard_wasm::fretboard::{generate, generate_default, NoteCategory, ScaleDegree};
use fretboard_wasm::models::catalog::{chord_intervals, scale_def};
use fretboard_wasm::models::pitch_class::transpose;
use fretboard_wasm::{
    CatalogError, ChordType, PitchClass, PitchClassSet, RootNote, ScaleType, Selection, Tuning,
    Visibility,
};

fn set(notes: &[&str]) -> PitchClassSet {
    notes.iter().map(|n| n.parse::<PitchClass>().unwrap()).collect()
}

fn all_selections() -> Vec<Selection> {
    let mut selections = vec![Selection::empty()];
    for root in RootNote::ALL {
        let chords = std::iter::once(None).chain(ChordType::ALL.into_iter().map(Some));
        for chord in chords {
            let scales = std::iter::once(None).chain(ScaleType::ALL.into_iter().map(Some));
            for scale in scales {
                selections.push(
                    Selection::empty()
                        .with_root(root)
                        .with_chord(chord)
                        .with_scale(scale),
                );
            }
        }
    }
    selections
}

#[test]
fn test_transpose_modular_closure() {
    for pc in PitchClass::ALL {
        for interval in -50..=50 {
            let result = transpose(pc, interval);
            assert_eq!(result, transpose(pc, interval.rem_euclid(12)));
            assert!(PitchClass::ALL.contains(&result));
        }
    }
}

#[test]
fn test_chord_correctness() {
    let a_major: PitchClassSet = ChordType::Major.notes(PitchClass::A).into_iter().collect();
    assert_eq!(a_major, set(&["A", "C#", "E"]));

    let c_minor_7: PitchClassSet = ChordType::Minor7.notes(PitchClass::C).into_iter().collect();
    assert_eq!(c_minor_7, set(&["C", "D#", "G", "A#"]));
}

#[test]
fn test_scale_correctness() {
    let a_major = ScaleType::Major.note_set(PitchClass::A);
    assert_eq!(a_major, set(&["A", "B", "C#", "D", "E", "F#", "G#"]));
    assert_eq!(a_major.len(), 7);
}

#[test]
fn test_degree_and_mode_consistency() {
    let selection = Selection::new().with_root(RootNote::A).with_scale(ScaleType::Major);
    let board = generate_default(&selection);

    for cell in board.cells() {
        match cell.note {
            PitchClass::B => {
                assert_eq!(cell.scale_degree, Some(ScaleDegree { position: 2, mode: "Dorian" }))
            }
            PitchClass::A => {
                assert_eq!(cell.scale_degree, Some(ScaleDegree { position: 1, mode: "Ionian" }))
            }
            _ => {}
        }
    }
}

#[test]
fn test_fretboard_shape() {
    for selection in all_selections().iter().step_by(17) {
        let board = generate(&Tuning::STANDARD, 12, selection);
        assert_eq!(board.strings().len(), 6);
        assert!(board.strings().iter().all(|row| row.len() == 13));
    }
}

#[test]
fn test_cells_match_tuning_and_recomputed_flags() {
    let tuning = Tuning::STANDARD;
    for selection in all_selections() {
        let board = generate(&tuning, 12, &selection);
        let chord_notes: PitchClassSet = selection.chord_notes().into_iter().collect();
        let scale_notes: PitchClassSet = selection.scale_notes().into_iter().collect();

        for cell in board.cells() {
            let open = tuning.open_note(cell.string).unwrap();
            assert_eq!(transpose(open, cell.fret as i32), cell.note);
            assert_eq!(cell.is_chord_tone, chord_notes.contains(cell.note));
            assert_eq!(cell.is_scale_tone, scale_notes.contains(cell.note));
            assert_eq!(cell.is_root, selection.root_pitch_class() == Some(cell.note));
            // Scale tones always classify when a scale is selected
            assert_eq!(cell.scale_degree.is_some(), cell.is_scale_tone);
        }

        assert_eq!(board, generate(&tuning, 12, &selection));
    }
}

#[test]
fn test_precedence_scenario() {
    let selection = Selection::new()
        .with_root(RootNote::A)
        .with_chord(ChordType::Major)
        .with_scale(ScaleType::Major);
    let board = generate_default(&selection);

    let open_a = board.cell(4, 0).unwrap();
    assert!(open_a.is_root && open_a.is_chord_tone && open_a.is_scale_tone);
    assert_eq!(open_a.display_category(&selection.visibility), Some(NoteCategory::Root));

    let c_sharp = board.cells().find(|c| c.note == PitchClass::Cs).unwrap();
    assert!(c_sharp.is_chord_tone);
    assert!(c_sharp.is_scale_tone);
    assert!(!c_sharp.is_root);
    assert_eq!(
        c_sharp.display_category(&selection.visibility),
        Some(NoteCategory::ChordAndScale)
    );

    let b = board.cells().find(|c| c.note == PitchClass::B).unwrap();
    assert_eq!(b.display_category(&selection.visibility), Some(NoteCategory::Scale));
}

#[test]
fn test_no_root_scenario() {
    let selection = Selection::empty().with_chord(ChordType::Major7);
    let board = generate_default(&selection);
    assert!(board.cells().all(|c| !c.is_chord_tone));
    assert!(board.cells().all(|c| c.display_category(&Visibility::ALL_VISIBLE).is_none()));
}

#[test]
fn test_invalid_catalog_keys() {
    assert!(matches!(
        chord_intervals("Major9"),
        Err(CatalogError::InvalidCatalogKey { .. })
    ));
    assert!(matches!(
        scale_def("Harmonic Minor"),
        Err(CatalogError::InvalidCatalogKey { .. })
    ));
    assert_eq!(scale_def("Dorian").unwrap().modes[6], "Ionian");
}

#[test]
fn test_generate_is_thread_safe() {
    let selection = Selection::new().with_chord(ChordType::Dominant7);
    let expected = generate_default(&selection);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || generate_default(&selection)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
