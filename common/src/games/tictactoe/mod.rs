mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_legal_move};
pub use bot_controller::{
    BotInput, MEDIUM_RANDOM_PROBABILITY, best_move, calculate_minimax_move, calculate_move,
    calculate_random_move, evaluate, minimax,
};
pub use game_state::TicTacToeGameState;
pub use session::{COMPUTER_MARK, TicTacToeSession};
pub use settings::{FirstPlayerMode, TicTacToeSessionSettings};
pub use types::{
    CELL_COUNT, Difficulty, GameMode, GameResult, Line, Mark, MoveError, MoveOutcome, Scores,
};
pub use win_detector::{LINES, check_win, check_win_with_line, describe_line, is_draw, winning_line};
