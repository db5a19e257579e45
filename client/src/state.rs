use tictactoe_common::games::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index.
    PlaceMark { index: usize },
    ResetGame,
    ResetScores,
    ToggleMode,
    SetDifficulty { difficulty: Difficulty },
    Share,
    Help,
    Quit,
}

impl ClientCommand {
    /// Parses one line of player input. Cells are typed 1-9, left to right, top to bottom.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Empty command".to_string());
        };

        if let Ok(cell) = head.parse::<usize>() {
            if !(1..=CELL_COUNT).contains(&cell) {
                return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
            }
            return Ok(ClientCommand::PlaceMark { index: cell - 1 });
        }

        match head.to_ascii_lowercase().as_str() {
            "r" | "reset" => Ok(ClientCommand::ResetGame),
            "s" | "scores" => Ok(ClientCommand::ResetScores),
            "m" | "mode" => Ok(ClientCommand::ToggleMode),
            "d" | "difficulty" => {
                let tier = parts
                    .next()
                    .ok_or_else(|| "Usage: d <easy|medium|hard>".to_string())?;
                let difficulty = tier.parse::<Difficulty>()?;
                Ok(ClientCommand::SetDifficulty { difficulty })
            }
            "share" => Ok(ClientCommand::Share),
            "h" | "help" | "?" => Ok(ClientCommand::Help),
            "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}
