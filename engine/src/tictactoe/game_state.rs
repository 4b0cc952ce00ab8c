use super::board::{CELL_COUNT, get_available_moves};
use super::types::{GameStatus, Mark};
use super::win_detector::check_win;

/// One game of tic-tac-toe. The single live instance is owned by the
/// UI and replaced wholesale on reset; bots clone it for lookahead.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: [Mark; CELL_COUNT],
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: [Mark::Empty; CELL_COUNT],
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(&self.board)
    }

    pub fn place_mark(&mut self, cell: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if cell >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", cell));
        }

        if self.board[cell] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[cell] = self.current_mark;
        self.last_move = Some(cell);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.is_board_full() {
            self.status = GameStatus::Draw;
        }
    }

    fn is_board_full(&self) -> bool {
        self.board.iter().all(|&cell| cell != Mark::Empty)
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}
