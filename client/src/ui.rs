use tictactoe_common::games::tictactoe::{
    Board, GameMode, GameResult, Line, Mark, Scores, TicTacToeSession, describe_line,
};

/// Who produced the move being narrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mover {
    Human,
    Computer,
}

pub const HELP: &str = "Commands: 1-9 place a mark, r reset game, s reset scores, \
m toggle mode, d <easy|medium|hard> set difficulty, share, q quit";

pub fn render_board(board: &Board, win_line: Option<Line>) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let mark = board.get(index).unwrap_or_default();
                let text = if mark == Mark::Empty {
                    (index + 1).to_string()
                } else {
                    mark.to_string()
                };
                match win_line {
                    Some(line) if line.contains(index) => format!("[{}]", text),
                    _ => format!(" {} ", text),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

pub fn player_name(mark: Mark, mode: GameMode, computer_name: &str) -> String {
    if mark == Mark::O && mode == GameMode::HumanVsComputer {
        computer_name.to_string()
    } else {
        format!("Player {}", mark)
    }
}

pub fn status_text(session: &TicTacToeSession, computer_name: &str) -> String {
    let mode = session.mode();
    match session.result() {
        GameResult::Win { mark, line } => format!(
            "{} wins! ({})",
            player_name(mark, mode, computer_name),
            describe_line(&line)
        ),
        GameResult::Draw => "It's a draw!".to_string(),
        GameResult::InProgress if session.is_computer_turn() => {
            if session.board().played_count() == 0 {
                format!("{} starts...", computer_name)
            } else {
                format!("{} is thinking...", computer_name)
            }
        }
        GameResult::InProgress => format!("Player {}'s turn", session.current_mark()),
    }
}

/// What the computer says after a move, if anything.
pub fn narration(
    result: GameResult,
    mover: Mover,
    mode: GameMode,
    next_is_computer: bool,
) -> Option<String> {
    match result {
        GameResult::Win { mark, line } => {
            if mark == Mark::O && mode == GameMode::HumanVsComputer {
                Some(format!(
                    "I win! That was a {}. Better luck next time!",
                    describe_line(&line)
                ))
            } else {
                Some(format!("Good job, Player {}. You win!", mark))
            }
        }
        GameResult::Draw => match mover {
            Mover::Computer => Some("That was close. A draw!".to_string()),
            Mover::Human => Some("It's a draw. Let's call it even!".to_string()),
        },
        GameResult::InProgress if next_is_computer => Some("Hmm... Let me think.".to_string()),
        GameResult::InProgress => None,
    }
}

pub fn opening_narration() -> &'static str {
    "I'll start this round!"
}

pub fn scoreboard(scores: Scores, mode: GameMode, computer_name: &str) -> String {
    format!(
        "Player X: {}    {}: {}",
        scores.x,
        player_name(Mark::O, mode, computer_name),
        scores.o
    )
}

pub fn share_summary(session: &TicTacToeSession, computer_name: &str) -> String {
    let scores = session.scores();
    let mode = match session.mode() {
        GameMode::HumanVsComputer => format!("Human vs {}", computer_name),
        GameMode::HumanVsHuman => "Human vs Human".to_string(),
    };
    format!(
        "Tic Tac Toe Scores:\nPlayer X: {}\n{}: {}\n\nMode: {}\nDifficulty: {}",
        scores.x,
        computer_name,
        scores.o,
        mode,
        session.difficulty().as_str().to_uppercase()
    )
}

pub fn render_frame(session: &TicTacToeSession, computer_name: &str) -> String {
    let win_line = match session.result() {
        GameResult::Win { line, .. } => Some(line),
        _ => None,
    };
    format!(
        "\n{}\n{}\n{}",
        render_board(session.board(), win_line),
        status_text(session, computer_name),
        scoreboard(session.scores(), session.mode(), computer_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::{
        Difficulty, FirstPlayerMode, TicTacToeSessionSettings,
    };

    fn session(mode: GameMode) -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            mode,
            difficulty: Difficulty::Hard,
            first_player_mode: FirstPlayerMode::Human,
        };
        TicTacToeSession::new(settings, SessionRng::new(1))
    }

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let rendered = render_board(&Board::new(), None);
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_render_highlights_win_line() {
        let mut game = session(GameMode::HumanVsHuman);
        for index in [0, 4, 1, 7, 2] {
            game.apply_human_move(index);
        }
        let frame = render_frame(&game, "Bridget");
        assert!(frame.contains("[X]|[X]|[X]"));
        assert!(frame.contains("Player X wins! (Horizontal (Top Row))"));
        assert!(frame.contains("Player X: 1    Player O: 0"));
    }

    #[test]
    fn test_status_names_computer() {
        let mut game = session(GameMode::HumanVsComputer);
        assert_eq!(status_text(&game, "Bridget"), "Player X's turn");
        game.apply_human_move(0);
        assert_eq!(status_text(&game, "Bridget"), "Bridget is thinking...");
    }

    #[test]
    fn test_narration() {
        let line = Line([2, 4, 6]);
        let computer_win = GameResult::Win { mark: Mark::O, line };
        assert_eq!(
            narration(computer_win, Mover::Computer, GameMode::HumanVsComputer, false).as_deref(),
            Some("I win! That was a Diagonal (↙). Better luck next time!")
        );
        assert_eq!(
            narration(computer_win, Mover::Human, GameMode::HumanVsHuman, false).as_deref(),
            Some("Good job, Player O. You win!")
        );
        let draw = narration(GameResult::Draw, Mover::Computer, GameMode::HumanVsComputer, false);
        assert_eq!(draw.as_deref(), Some("That was close. A draw!"));
        let thinking =
            narration(GameResult::InProgress, Mover::Human, GameMode::HumanVsComputer, true);
        assert_eq!(thinking.as_deref(), Some("Hmm... Let me think."));
        assert_eq!(
            narration(GameResult::InProgress, Mover::Human, GameMode::HumanVsHuman, false),
            None
        );
    }

    #[test]
    fn test_share_summary() {
        let game = session(GameMode::HumanVsComputer);
        let summary = share_summary(&game, "Bridget");
        assert!(summary.contains("Player X: 0\nBridget: 0"));
        assert!(summary.contains("Mode: Human vs Bridget"));
        assert!(summary.ends_with("Difficulty: HARD"));
    }
}
