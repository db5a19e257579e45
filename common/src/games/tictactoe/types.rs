use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Three cell indices that win the game when owned by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line(pub [usize; 3]);

impl Line {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win { mark: Mark, line: Line },
    Draw,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsComputer,
}

impl GameMode {
    pub fn toggled(&self) -> GameMode {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" | "human" | "human_vs_human" => Ok(GameMode::HumanVsHuman),
            "ai" | "computer" | "human_vs_computer" => Ok(GameMode::HumanVsComputer),
            other => Err(format!("Unknown game mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
}

impl Scores {
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
            Mark::Empty => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    OutOfRange(usize),
    CellOccupied(usize),
    NotYourTurn,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::OutOfRange(index) => write!(f, "Cell {} is out of range", index),
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for MoveError {}

/// What the presentation layer needs after a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub result: GameResult,
    pub next_actor: Option<Mark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_mode_from_str_and_toggle() {
        assert_eq!("ai".parse::<GameMode>(), Ok(GameMode::HumanVsComputer));
        assert_eq!("pvp".parse::<GameMode>(), Ok(GameMode::HumanVsHuman));
        assert_eq!(GameMode::HumanVsHuman.toggled(), GameMode::HumanVsComputer);
    }

    #[test]
    fn test_scores_ignore_empty() {
        let mut scores = Scores::default();
        scores.record_win(Mark::X);
        scores.record_win(Mark::Empty);
        scores.record_win(Mark::O);
        scores.record_win(Mark::O);
        assert_eq!(scores, Scores { x: 1, o: 2 });
    }
}
