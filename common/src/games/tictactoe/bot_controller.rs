use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::types::{CELL_COUNT, Difficulty, Mark};
use super::win_detector::{is_draw, winning_line};

/// Chance that a medium-tier move is random rather than optimal, flipped on every move.
pub const MEDIUM_RANDOM_PROBABILITY: f64 = 0.5;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self { board, current_mark }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_RANDOM_PROBABILITY) {
                calculate_random_move(&input, rng)
            } else {
                calculate_minimax_move(&input)
            }
        }
        Difficulty::Hard => calculate_minimax_move(&input),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    rng.pick(&get_available_moves(&input.board))
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    best_move(&input.board, input.current_mark)
}

/// Optimal cell for `bot_mark`. Ties go to the lowest index.
pub fn best_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    bot_mark.opponent()?;
    let mut board = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in 0..CELL_COUNT {
        if board.cells()[index] != Mark::Empty {
            continue;
        }

        board.set(index, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Terminal score from the bot's point of view: quicker wins and slower losses score higher.
/// `None` while the game is still open.
pub fn evaluate(board: &Board, depth: usize, bot_mark: Mark) -> Option<i32> {
    let depth = depth as i32;
    let opponent_mark = bot_mark.opponent()?;

    if winning_line(board, bot_mark).is_some() {
        return Some(WIN_SCORE - depth);
    }
    if winning_line(board, opponent_mark).is_some() {
        return Some(depth - WIN_SCORE);
    }
    if is_draw(board) {
        return Some(0);
    }
    None
}

pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(score) = evaluate(board, depth, bot_mark) {
        return score;
    }

    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };
    let (move_mark, mut best) = if is_maximizing {
        (bot_mark, i32::MIN)
    } else {
        (opponent_mark, i32::MAX)
    };

    for index in 0..CELL_COUNT {
        if board.cells()[index] != Mark::Empty {
            continue;
        }

        board.set(index, move_mark);
        let eval = minimax(board, depth + 1, !is_maximizing, bot_mark);
        board.set(index, Mark::Empty);

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}
