use crate::games::SessionRng;
use crate::log;
use super::board::{Board, is_legal_move};
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::{FirstPlayerMode, TicTacToeSessionSettings};
use super::types::{Difficulty, GameMode, GameResult, Mark, MoveError, MoveOutcome, Scores};
use super::win_detector::describe_line;

/// The computer always plays O.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Owns one game table: the current game, the running score and the opponent settings.
///
/// Everything is synchronous. After a move that hands the turn to the computer, the caller
/// decides how long to wait and then calls [`TicTacToeSession::play_computer_turn`].
pub struct TicTacToeSession {
    game_state: TicTacToeGameState,
    scores: Scores,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
    games_started: u32,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        let mut session = Self {
            game_state: TicTacToeGameState::new(Mark::X),
            scores: Scores::default(),
            settings,
            rng,
            games_started: 0,
        };
        session.reset_game();
        session
    }

    /// Starts a fresh board and returns who acts first. Scores are kept.
    pub fn reset_game(&mut self) -> Mark {
        let computer_opens = self.settings.mode == GameMode::HumanVsComputer
            && self.settings.first_player_mode == FirstPlayerMode::Random
            && self.rng.random_bool();
        let first_mark = if computer_opens { COMPUTER_MARK } else { Mark::X };

        self.game_state = TicTacToeGameState::new(first_mark);
        self.games_started += 1;
        log!(
            "Game {} started ({:?}, {}), {} opens",
            self.games_started,
            self.settings.mode,
            self.settings.difficulty,
            first_mark
        );
        first_mark
    }

    pub fn reset_scores(&mut self) -> Mark {
        self.scores = Scores::default();
        self.reset_game()
    }

    /// Switching opponents abandons the current game.
    pub fn set_mode(&mut self, mode: GameMode) -> Mark {
        self.settings.mode = mode;
        self.reset_game()
    }

    /// Applies from the next computer move on; the board is kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    pub fn is_computer_turn(&self) -> bool {
        self.settings.mode == GameMode::HumanVsComputer
            && self.game_state.next_actor() == Some(COMPUTER_MARK)
    }

    /// A human click. Refused while the computer is to act.
    pub fn apply_human_move(&mut self, index: usize) -> MoveOutcome {
        if self.is_computer_turn() {
            return self.reject(index, MoveError::NotYourTurn);
        }
        self.apply_move(index)
    }

    /// Applies a move for whoever is to act. Illegal moves change nothing.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if !is_legal_move(self.board(), index, self.is_game_over()) {
            return self.reject(index, self.illegal_move_error(index));
        }

        let mover = self.game_state.current_mark;
        match self.game_state.place_mark(index) {
            Ok(result) => {
                if let GameResult::Win { mark, line } = result {
                    self.scores.record_win(mark);
                    log!(
                        "Player {} wins with {} ({:?}), score X {} : O {}",
                        mark,
                        describe_line(&line),
                        line.cells(),
                        self.scores.x,
                        self.scores.o
                    );
                } else if result == GameResult::Draw {
                    log!("Game {} ended in a draw", self.games_started);
                } else {
                    log!("Player {} took cell {}", mover, index);
                }
                self.outcome(true)
            }
            Err(e) => self.reject(index, e),
        }
    }

    /// The difficulty policy's pick for the computer, or `None` when it is not the computer's turn.
    pub fn request_computer_move(&mut self) -> Option<usize> {
        if !self.is_computer_turn() {
            return None;
        }
        let input = BotInput::new(self.game_state.board, COMPUTER_MARK);
        calculate_move(self.settings.difficulty, input, &mut self.rng)
    }

    pub fn play_computer_turn(&mut self) -> MoveOutcome {
        match self.request_computer_move() {
            Some(index) => {
                log!("Computer ({}) chose cell {}", self.settings.difficulty, index);
                self.apply_move(index)
            }
            None => self.outcome(false),
        }
    }

    fn illegal_move_error(&self, index: usize) -> MoveError {
        if self.is_game_over() {
            MoveError::GameOver
        } else if self.board().get(index).is_none() {
            MoveError::OutOfRange(index)
        } else {
            MoveError::CellOccupied(index)
        }
    }

    fn reject(&self, index: usize, error: MoveError) -> MoveOutcome {
        log!("Rejected move at cell {}: {}", index, error);
        self.outcome(false)
    }

    fn outcome(&self, accepted: bool) -> MoveOutcome {
        MoveOutcome {
            accepted,
            result: self.game_state.result,
            next_actor: self.game_state.next_actor(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn current_mark(&self) -> Mark {
        self.game_state.current_mark
    }

    pub fn result(&self) -> GameResult {
        self.game_state.result
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state.is_over()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.game_state.last_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Line;
    use crate::games::tictactoe::win_detector::check_win;

    fn pvp_session() -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            mode: GameMode::HumanVsHuman,
            ..TicTacToeSessionSettings::default()
        };
        TicTacToeSession::new(settings, SessionRng::new(11))
    }

    fn computer_session(
        difficulty: Difficulty,
        first_player_mode: FirstPlayerMode,
    ) -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            mode: GameMode::HumanVsComputer,
            difficulty,
            first_player_mode,
        };
        TicTacToeSession::new(settings, SessionRng::new(42))
    }

    #[test]
    fn test_top_row_win_scores_for_x() {
        let mut session = pvp_session();
        for index in [0, 4, 1, 7] {
            let outcome = session.apply_human_move(index);
            assert!(outcome.accepted);
            assert_eq!(outcome.result, GameResult::InProgress);
        }
        let outcome = session.apply_human_move(2);
        assert!(outcome.accepted);
        assert_eq!(outcome.next_actor, None);
        let GameResult::Win { mark, line } = outcome.result else {
            panic!("expected a win, got {:?}", outcome.result);
        };
        assert_eq!(mark, Mark::X);
        assert_eq!(line, Line([0, 1, 2]));
        assert_eq!(describe_line(&line), "Horizontal (Top Row)");
        assert_eq!(session.scores(), Scores { x: 1, o: 0 });
        assert!(session.is_game_over());
    }

    #[test]
    fn test_pvp_always_starts_with_x() {
        let mut session = pvp_session();
        for _ in 0..20 {
            assert_eq!(session.reset_game(), Mark::X);
            assert_eq!(session.current_mark(), Mark::X);
        }
    }

    #[test]
    fn test_illegal_moves_are_idempotent() {
        let mut session = pvp_session();
        session.apply_human_move(4);
        let board = *session.board();

        for index in [4, 9, 100] {
            let outcome = session.apply_human_move(index);
            assert!(!outcome.accepted);
            assert_eq!(outcome.next_actor, Some(Mark::O));
        }
        assert_eq!(*session.board(), board);
        assert_eq!(session.current_mark(), Mark::O);
    }

    #[test]
    fn test_accepted_moves_match_legality() {
        for index in 0..11 {
            let mut session = pvp_session();
            for played in [4, 0] {
                session.apply_human_move(played);
            }
            let legal = is_legal_move(session.board(), index, session.is_game_over());
            assert_eq!(session.apply_human_move(index).accepted, legal, "cell {}", index);
        }

        let mut session = pvp_session();
        for index in [0, 4, 1, 7, 2] {
            session.apply_human_move(index);
        }
        assert!(!is_legal_move(session.board(), 8, session.is_game_over()));
        assert!(!session.apply_human_move(8).accepted);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut session = pvp_session();
        for index in [0, 4, 1, 7, 2] {
            session.apply_human_move(index);
        }
        let board = *session.board();
        let result = session.result();

        let outcome = session.apply_human_move(8);
        assert!(!outcome.accepted);
        assert_eq!(outcome.result, result);
        assert_eq!(*session.board(), board);
        assert_eq!(session.scores(), Scores { x: 1, o: 0 });
        assert_eq!(session.current_mark(), Mark::X);
    }

    #[test]
    fn test_reset_keeps_scores_until_score_reset() {
        let mut session = pvp_session();
        for index in [0, 4, 1, 7, 2] {
            session.apply_human_move(index);
        }
        session.reset_game();
        assert_eq!(session.board().played_count(), 0);
        assert!(!session.is_game_over());
        assert_eq!(session.scores().x, 1);

        session.reset_scores();
        assert_eq!(session.scores(), Scores::default());
    }

    #[test]
    fn test_human_first_hands_turn_to_computer() {
        let mut session = computer_session(Difficulty::Hard, FirstPlayerMode::Human);
        assert_eq!(session.current_mark(), Mark::X);
        assert_eq!(session.request_computer_move(), None);

        let outcome = session.apply_human_move(0);
        assert!(outcome.accepted);
        assert_eq!(outcome.next_actor, Some(COMPUTER_MARK));
        assert!(session.is_computer_turn());

        let refused = session.apply_human_move(1);
        assert!(!refused.accepted);
        assert_eq!(session.board().played_count(), 1);

        let reply = session.play_computer_turn();
        assert!(reply.accepted);
        assert_eq!(session.last_move(), Some(4));
        assert_eq!(reply.next_actor, Some(Mark::X));
    }

    #[test]
    fn test_coin_flip_lets_computer_open_sometimes() {
        let mut session = computer_session(Difficulty::Easy, FirstPlayerMode::Random);
        let openers: Vec<Mark> = (0..64).map(|_| session.reset_game()).collect();
        assert!(openers.contains(&Mark::X));
        assert!(openers.contains(&COMPUTER_MARK));

        while session.reset_game() != COMPUTER_MARK {}
        assert!(session.is_computer_turn());
        let outcome = session.play_computer_turn();
        assert!(outcome.accepted);
        assert_eq!(session.board().played_count(), 1);
        assert_eq!(outcome.next_actor, Some(Mark::X));
    }

    #[test]
    fn test_computer_turn_refused_in_pvp() {
        let mut session = pvp_session();
        session.apply_human_move(0);
        let outcome = session.play_computer_turn();
        assert!(!outcome.accepted);
        assert_eq!(session.board().played_count(), 1);
    }

    #[test]
    fn test_hard_computer_never_loses_a_full_game() {
        let mut session = computer_session(Difficulty::Hard, FirstPlayerMode::Random);
        let mut human_rng = SessionRng::new(8);

        for _ in 0..20 {
            session.reset_game();
            while !session.is_game_over() {
                if session.is_computer_turn() {
                    assert!(session.play_computer_turn().accepted);
                } else {
                    let empty = crate::games::tictactoe::get_available_moves(session.board());
                    let index = human_rng.pick(&empty).unwrap();
                    assert!(session.apply_human_move(index).accepted);
                }
            }
            assert_ne!(check_win(session.board()), Some(Mark::X));
        }
        assert_eq!(session.scores().x, 0);
    }

    #[test]
    fn test_difficulty_change_keeps_board() {
        let mut session = computer_session(Difficulty::Easy, FirstPlayerMode::Human);
        session.apply_human_move(0);
        session.set_difficulty(Difficulty::Hard);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.board().played_count(), 1);
        assert_eq!(session.request_computer_move(), Some(4));
    }

    #[test]
    fn test_mode_change_resets_board() {
        let mut session = computer_session(Difficulty::Easy, FirstPlayerMode::Human);
        session.apply_human_move(0);
        assert_eq!(session.set_mode(GameMode::HumanVsHuman), Mark::X);
        assert_eq!(session.mode(), GameMode::HumanVsHuman);
        assert_eq!(session.board().played_count(), 0);
    }
}
