use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Position};
use crate::win_detector::{check_win_at, find_completing_cell};

pub fn calculate_move(
    difficulty: Difficulty,
    board: &mut Board,
    mark: Mark,
    history: &[Position],
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => calculate_medium_move(board, mark, history, rng),
        Difficulty::Hard => calculate_minimax_move(board, mark),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

fn calculate_medium_move(
    board: &Board,
    mark: Mark,
    history: &[Position],
    rng: &mut SessionRng,
) -> Option<Position> {
    if history.is_empty() {
        return calculate_random_move(board, rng);
    }

    if history.len() >= 2
        && let Some(cell) = find_completing_cell(board, mark, history[history.len() - 2])
    {
        return Some(cell);
    }

    let opponent_mark = mark.opponent()?;
    if let Some(cell) = find_completing_cell(board, opponent_mark, history[history.len() - 1]) {
        return Some(cell);
    }

    calculate_random_move(board, rng)
}

fn calculate_minimax_move(board: &mut Board, bot_mark: Mark) -> Option<Position> {
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for pos in board.available_moves() {
        board.set(pos.row, pos.col, bot_mark);
        let move_score = minimax(board, pos, false, bot_mark);
        board.set(pos.row, pos.col, Mark::Empty);

        if move_score > best_score {
            best_score = move_score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(board: &mut Board, last: Position, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(winner) = check_win_at(board, last) {
        return if winner == bot_mark { 1 } else { -1 };
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for pos in board.available_moves() {
            board.set(pos.row, pos.col, bot_mark);
            best_score = best_score.max(minimax(board, pos, false, bot_mark));
            board.set(pos.row, pos.col, Mark::Empty);
        }
        best_score
    } else {
        let opponent_mark = bot_mark.opponent().unwrap();
        let mut best_score = i32::MAX;
        for pos in board.available_moves() {
            board.set(pos.row, pos.col, opponent_mark);
            best_score = best_score.min(minimax(board, pos, true, bot_mark));
            board.set(pos.row, pos.col, Mark::Empty);
        }
        best_score
    }
}
