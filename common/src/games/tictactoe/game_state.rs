use super::board::Board;
use super::types::{GameResult, Mark, MoveError};
use super::win_detector::{is_draw, winning_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub result: GameResult,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            current_mark: first_mark,
            result: GameResult::InProgress,
            last_move: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Places the current player's mark and settles the result. The board is untouched on error.
    pub fn place_mark(&mut self, index: usize) -> Result<GameResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_mark;
        self.board.place_mark(index, mover)?;
        self.last_move = Some(index);

        self.result = self.check_game_over(mover);
        if !self.result.is_over() {
            self.switch_turn();
        }

        Ok(self.result)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&self, mover: Mark) -> GameResult {
        if let Some(line) = winning_line(&self.board, mover) {
            return GameResult::Win { mark: mover, line };
        }
        if is_draw(&self.board) {
            return GameResult::Draw;
        }
        GameResult::InProgress
    }

    /// The player to act, or `None` once the game is over.
    pub fn next_actor(&self) -> Option<Mark> {
        if self.is_over() { None } else { Some(self.current_mark) }
    }
}
