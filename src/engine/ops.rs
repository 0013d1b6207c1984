use super::tile::Tile;

pub type Score = u64;

/// Where one column's tiles come to rest after a north tilt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnShift {
    /// Surviving tiles, north-most first, at their resting rows.
    pub resting: Vec<Tile>,
    /// Sum of the values created by merges in this column.
    pub score: Score,
    /// True iff any tile moved or merged.
    pub changed: bool,
}

/// Slide and merge one column toward the north edge (row `size - 1`).
///
/// `tiles` are the column's occupants listed from the north edge southward
/// with gaps removed, as returned by `Board::column`. Equal neighbours merge
/// once: a tile produced by a merge is not a merge candidate again, so among
/// three equal tiles the two nearest the north edge merge. Tiles already at
/// the top of the `u32` range (`2^31`) stay put instead of merging.
pub fn compact_column(tiles: &[Tile], size: usize) -> ColumnShift {
    debug_assert!(tiles.len() <= size, "column holds more tiles than rows");
    let mut shift = ColumnShift {
        resting: Vec::with_capacity(tiles.len()),
        ..ColumnShift::default()
    };
    // Next free row plus one, so an empty column never underflows.
    let mut free = size;
    let mut mergeable = false;

    for &tile in tiles {
        if let Some(last) = shift.resting.last_mut() {
            if mergeable && last.value() == tile.value() && last.can_merge() {
                *last = last.merged(last.col(), last.row());
                shift.score += Score::from(last.value());
                shift.changed = true;
                mergeable = false;
                continue;
            }
        }
        free -= 1;
        if tile.row() != free {
            shift.changed = true;
        }
        shift.resting.push(tile.moved_to(tile.col(), free));
        mergeable = true;
    }
    shift
}

/// Slide and merge a line of raw values (`0` = empty) toward index 0.
///
/// Returns the new line and the score gained. Convenience over
/// `compact_column` for callers that think in plain arrays.
pub fn shift_line(line: &[u32]) -> (Vec<u32>, Score) {
    let size = line.len();
    // Index 0 is the north edge, i.e. row `size - 1`.
    let tiles: Vec<Tile> = line
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(i, &v)| Tile::create(v, 0, size - 1 - i))
        .collect();
    let shift = compact_column(&tiles, size);
    let mut out = vec![0; size];
    for t in &shift.resting {
        out[size - 1 - t.row()] = t.value();
    }
    (out, shift.score)
}
