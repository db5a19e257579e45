use super::types::{Difficulty, GameMode};

/// Who may open a human-vs-computer game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstPlayerMode {
    /// Coin flip at every reset; the computer opens on heads.
    #[default]
    Random,
    /// The human always opens.
    Human,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub first_player_mode: FirstPlayerMode,
}
