mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{CELL_COUNT, LINES, get_available_moves};
pub use bot::calculate_move;
pub use game_state::TicTacToeGameState;
pub use types::{BotDifficulty, GameMode, GameStatus, Mark};
pub use win_detector::{check_win, check_win_with_line};
