use crate::session_rng::SessionRng;
use super::game_state::TicTacToeGameState;
use super::types::{BotDifficulty, GameStatus, Mark};

/// Picks a cell for `bot_mark` at the given difficulty. Returns
/// `None` when the game is over or no cell is free.
pub fn calculate_move(
    difficulty: BotDifficulty,
    state: &TicTacToeGameState,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    if state.status != GameStatus::InProgress {
        return None;
    }

    match difficulty {
        BotDifficulty::Easy => calculate_random_move(state, rng),
        BotDifficulty::Medium => calculate_heuristic_move(state, bot_mark, rng),
        BotDifficulty::Hard => calculate_exhaustive_move(state, bot_mark, rng),
    }
}

fn calculate_random_move(state: &TicTacToeGameState, rng: &mut SessionRng) -> Option<usize> {
    let moves = state.available_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

/// Win if possible, block an opponent win otherwise, random fallback.
/// A greedy two-ply lookahead: it never sets up forks, which keeps it
/// beatable as the medium tier.
fn calculate_heuristic_move(
    state: &TicTacToeGameState,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;

    if let Some(cell) = find_winning_move(state, bot_mark) {
        return Some(cell);
    }

    if let Some(cell) = find_winning_move(state, opponent_mark) {
        return Some(cell);
    }

    calculate_random_move(state, rng)
}

/// First free cell, in ascending order, that completes a line for
/// `mark`. The probe forces the turn on a clone so the same check
/// serves both the "win" and the "block" tier regardless of whose
/// turn it really is.
fn find_winning_move(state: &TicTacToeGameState, mark: Mark) -> Option<usize> {
    for cell in state.available_moves() {
        let mut probe = state.clone();
        probe.current_mark = mark;
        if probe.place_mark(cell).is_ok() && probe.status.winner() == Some(mark) {
            return Some(cell);
        }
    }
    None
}

/// Full-depth minimax over every reachable position. No pruning: the
/// search space tops out at 9! move sequences, small enough to walk
/// whole. Equally optimal moves are collected and one is drawn at
/// random so games against the hard bot do not all look identical.
fn calculate_exhaustive_move(
    state: &TicTacToeGameState,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    let moves = state.available_moves();
    if moves.is_empty() {
        return None;
    }

    let mut best_score = i32::MIN;
    let mut best_moves: Vec<usize> = Vec::new();

    for cell in moves {
        let mut probe = state.clone();
        probe.current_mark = bot_mark;
        if probe.place_mark(cell).is_err() {
            continue;
        }

        let score = minimax(&probe, bot_mark, false);
        if score > best_score {
            best_score = score;
            best_moves = vec![cell];
        } else if score == best_score {
            best_moves.push(cell);
        }
    }

    if best_moves.is_empty() {
        return None;
    }
    Some(best_moves[rng.random_range(0..best_moves.len())])
}

/// Score from the bot's perspective: +1 own win, -1 opponent win,
/// 0 draw. `place_mark` already flipped `current_mark`, so each
/// recursion step plays the correct side.
fn minimax(state: &TicTacToeGameState, bot_mark: Mark, maximizing: bool) -> i32 {
    match state.status {
        GameStatus::Draw => return 0,
        GameStatus::XWon | GameStatus::OWon => {
            return if state.status.winner() == Some(bot_mark) { 1 } else { -1 };
        }
        GameStatus::InProgress => {}
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for cell in state.available_moves() {
        let mut probe = state.clone();
        if probe.place_mark(cell).is_err() {
            continue;
        }

        let score = minimax(&probe, bot_mark, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
