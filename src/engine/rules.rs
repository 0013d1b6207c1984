//! Terminal-condition checks. All functions look at physical cells and
//! ignore the board's viewing perspective.

use super::board::Board;

/// True if at least one cell is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    board.count_empty() > 0
}

/// True if any tile holds `max_piece`.
pub fn max_tile_exists(board: &Board, max_piece: u32) -> bool {
    board.tiles().any(|t| t.value() == max_piece)
}

/// True if some tilt could still change the board: either a cell is empty,
/// or two horizontally or vertically adjacent tiles share a value.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }
    let size = board.size();
    let value = |col: usize, row: usize| board.physical(col, row).map(|t| t.value());
    for col in 0..size {
        for row in 0..size {
            let current = value(col, row);
            if col + 1 < size && value(col + 1, row) == current {
                return true;
            }
            if row + 1 < size && value(col, row + 1) == current {
                return true;
            }
        }
    }
    false
}

/// Game over: the max piece was reached or nothing can move.
pub fn is_game_over(board: &Board, max_piece: u32) -> bool {
    max_tile_exists(board, max_piece) || !at_least_one_move_exists(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(raw: &[Vec<u32>]) -> Board {
        Board::from_values(raw).unwrap()
    }

    #[test]
    fn empty_board_has_moves() {
        let b = Board::new(4);
        assert!(empty_space_exists(&b));
        assert!(at_least_one_move_exists(&b));
        assert!(!is_game_over(&b, 2048));
    }

    #[test]
    fn full_board_without_pairs_is_over() {
        let b = board(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ]);
        assert!(!empty_space_exists(&b));
        assert!(!at_least_one_move_exists(&b));
        assert!(is_game_over(&b, 2048));
    }

    #[test]
    fn horizontal_pair_is_a_move() {
        let b = board(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 8, 8],
        ]);
        assert!(at_least_one_move_exists(&b));
        assert!(!is_game_over(&b, 2048));
    }

    #[test]
    fn vertical_pair_on_last_column_is_a_move() {
        let b = board(&[
            vec![2, 4, 2, 16],
            vec![4, 2, 4, 16],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ]);
        assert!(at_least_one_move_exists(&b));
    }

    #[test]
    fn max_piece_ends_game_regardless_of_moves() {
        let b = board(&[
            vec![0, 0, 0, 0],
            vec![0, 2048, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 2],
        ]);
        assert!(max_tile_exists(&b, 2048));
        assert!(at_least_one_move_exists(&b));
        assert!(is_game_over(&b, 2048));
        assert!(!is_game_over(&b, 4096));
    }
}
