use super::board::{CELL_COUNT, LINES};
use super::types::Mark;

pub fn check_win(board: &[Mark; CELL_COUNT]) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// Reports the winner together with the completed triple so the UI
/// can highlight it. At most one player can have three in a row under
/// alternating play, so the first match is the only match.
pub fn check_win_with_line(board: &[Mark; CELL_COUNT]) -> Option<(Mark, [usize; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if board[a] != Mark::Empty && board[a] == board[b] && board[b] == board[c] {
            return Some((board[a], line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &str) -> [Mark; CELL_COUNT] {
        let mut board = [Mark::Empty; CELL_COUNT];
        for (i, c) in cells.chars().enumerate() {
            board[i] = match c {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&board_from(".........")), None);
    }

    #[test]
    fn test_top_row_win() {
        let board = board_from("XXXOO....");
        assert_eq!(check_win_with_line(&board), Some((Mark::X, [0, 1, 2])));
    }

    #[test]
    fn test_middle_column_win() {
        let board = board_from("XO.XO..O.");
        assert_eq!(check_win_with_line(&board), Some((Mark::O, [1, 4, 7])));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from("XOO.X...X");
        assert_eq!(check_win_with_line(&board), Some((Mark::X, [0, 4, 8])));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from("XXO.OXO..");
        assert_eq!(check_win_with_line(&board), Some((Mark::O, [2, 4, 6])));
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // X O X / X O O / O X X
        assert_eq!(check_win(&board_from("XOXXOOOXX")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_win(&board_from("XXO......")), None);
    }
}
