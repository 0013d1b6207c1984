//! Property tests for the tilt kernel.
//!
//! Invariants covered:
//! - After a north tilt every column is packed against the north edge.
//! - A north tilt matches a naive pair-merging reference, score included.
//! - Tilts conserve the sum of tile values.
//! - A tilt that reports no change leaves the model equal to before.
//! - `game_over` always agrees with an independent scan of the board.
use proptest::prelude::*;
use tilt_2048::{Model, Side};

fn cell() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        2 => (1u32..=6).prop_map(|e| 1u32 << e),
    ]
}

/// Square layouts, top row first, sides 2 through 6.
fn layout() -> impl Strategy<Value = Vec<Vec<u32>>> {
    (2usize..=6).prop_flat_map(|size| {
        prop::collection::vec(prop::collection::vec(cell(), size), size)
    })
}

fn side() -> impl Strategy<Value = Side> {
    prop::sample::select(Side::ALL.to_vec())
}

/// Values of column `col`, top row first.
fn column_top_down(m: &Model, col: usize) -> Vec<u32> {
    (0..m.size())
        .rev()
        .map(|row| m.tile(col, row).map_or(0, |t| t.value()))
        .collect()
}

fn total(m: &Model) -> u64 {
    m.board().tiles().map(|t| t.value() as u64).sum()
}

/// Collapse, then merge equal neighbours pairwise from the front.
fn reference_north(values: &[u32]) -> (Vec<u32>, u64) {
    let packed: Vec<u32> = values.iter().copied().filter(|&v| v != 0).collect();
    let mut out = Vec::with_capacity(values.len());
    let mut score = 0;
    let mut i = 0;
    while i < packed.len() {
        if i + 1 < packed.len() && packed[i] == packed[i + 1] {
            out.push(packed[i] * 2);
            score += u64::from(packed[i] * 2);
            i += 2;
        } else {
            out.push(packed[i]);
            i += 1;
        }
    }
    out.resize(values.len(), 0);
    (out, score)
}

fn independent_game_over(m: &Model) -> bool {
    let size = m.size();
    let value = |c: usize, r: usize| m.tile(c, r).map_or(0, |t| t.value());
    let mut max_piece = false;
    let mut can_move = false;
    for c in 0..size {
        for r in 0..size {
            let v = value(c, r);
            if v == m.config().max_piece {
                max_piece = true;
            }
            if v == 0
                || (c + 1 < size && value(c + 1, r) == v)
                || (r + 1 < size && value(c, r + 1) == v)
            {
                can_move = true;
            }
        }
    }
    max_piece || !can_move
}

proptest! {
    #[test]
    fn north_tilt_packs_columns(raw in layout()) {
        let mut m = Model::from_values(&raw, 0, 0).unwrap();
        m.tilt(Side::North);
        for col in 0..m.size() {
            let values = column_top_down(&m, col);
            let first_gap = values.iter().position(|&v| v == 0).unwrap_or(values.len());
            prop_assert!(values[first_gap..].iter().all(|&v| v == 0), "gap in column {}: {:?}", col, values);
        }
    }

    #[test]
    fn north_tilt_matches_reference(raw in layout()) {
        let mut m = Model::from_values(&raw, 0, 0).unwrap();
        let before: Vec<Vec<u32>> = (0..m.size()).map(|c| column_top_down(&m, c)).collect();
        let changed = m.tilt(Side::North);
        let mut expected_score = 0;
        let mut expected_changed = false;
        for (col, values) in before.iter().enumerate() {
            let (expected, score) = reference_north(values);
            expected_score += score;
            expected_changed |= &expected != values;
            prop_assert_eq!(column_top_down(&m, col), expected);
        }
        prop_assert_eq!(m.score(), expected_score);
        prop_assert_eq!(changed, expected_changed);
    }

    #[test]
    fn tilt_conserves_value(raw in layout(), dir in side()) {
        let mut m = Model::from_values(&raw, 0, 0).unwrap();
        let before = total(&m);
        m.tilt(dir);
        prop_assert_eq!(total(&m), before);
    }

    #[test]
    fn unchanged_tilt_is_a_noop(raw in layout(), dir in side()) {
        let mut m = Model::from_values(&raw, 0, 0).unwrap();
        m.tilt(dir);
        let settled = m.clone();
        if !m.tilt(dir) {
            prop_assert_eq!(&m, &settled);
        }
        // Collapsing alone never needs more than `size` tilts to settle.
        for _ in 0..m.size() {
            if !m.tilt(dir) {
                break;
            }
        }
        let snapshot = m.clone();
        prop_assert!(!m.tilt(dir));
        prop_assert_eq!(m, snapshot);
    }

    #[test]
    fn game_over_tracks_board(raw in layout(), dirs in prop::collection::vec(side(), 0..8)) {
        let mut m = Model::from_values(&raw, 0, 0).unwrap();
        prop_assert_eq!(m.game_over(), independent_game_over(&m));
        for dir in dirs {
            let score_before = m.score();
            m.tilt(dir);
            prop_assert!(m.score() >= score_before);
            prop_assert_eq!(m.game_over(), independent_game_over(&m));
            if m.game_over() {
                prop_assert!(m.max_score() >= m.score());
            }
        }
    }
}
