use super::types::{CELL_COUNT, Mark, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange(index))?;
        if *cell != Mark::Empty {
            return Err(MoveError::CellOccupied(index));
        }
        *cell = mark;
        Ok(())
    }

    /// Search-only counterpart of an unchecked placement.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn played_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_legal_move(board: &Board, index: usize, game_over: bool) -> bool {
    !game_over && board.get(index) == Some(Mark::Empty)
}
