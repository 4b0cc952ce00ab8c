use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
/// Cell `i` sits at row `i / 3`, column `i % 3`.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Empty cells in ascending index order. The heuristic bot relies on
/// this ordering for its "first winning/blocking cell" rule.
pub fn get_available_moves(board: &[Mark; CELL_COUNT]) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_nine_moves() {
        let board = [Mark::Empty; CELL_COUNT];
        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_occupied_cells_are_skipped() {
        let mut board = [Mark::Empty; CELL_COUNT];
        board[0] = Mark::X;
        board[4] = Mark::O;
        board[8] = Mark::X;
        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = [Mark::X; CELL_COUNT];
        assert!(get_available_moves(&board).is_empty());
    }
}
