use super::board::Board;
use super::types::{Line, Mark};

pub const LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

const LINE_LABELS: [([usize; 3], &str); 8] = [
    ([0, 1, 2], "Horizontal (Top Row)"),
    ([3, 4, 5], "Horizontal (Middle Row)"),
    ([6, 7, 8], "Horizontal (Bottom Row)"),
    ([0, 3, 6], "Vertical (Left Column)"),
    ([1, 4, 7], "Vertical (Middle Column)"),
    ([2, 5, 8], "Vertical (Right Column)"),
    ([0, 4, 8], "Diagonal (↘)"),
    ([2, 4, 6], "Diagonal (↙)"),
];

/// First line, in `LINES` order, fully owned by `mark`.
pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    if mark == Mark::Empty {
        return None;
    }
    LINES
        .iter()
        .copied()
        .find(|line| line.cells().iter().all(|&i| board.get(i) == Some(mark)))
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| winning_line(board, mark).map(|line| (mark, line)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// Matches by membership: a label applies when all of its canonical cells are in the line.
pub fn describe_line(line: &Line) -> &'static str {
    LINE_LABELS
        .iter()
        .find(|(canonical, _)| canonical.iter().all(|&i| line.contains(i)))
        .map(|(_, label)| *label)
        .unwrap_or("")
}

/// Callers check for a win first; a full board with a line is a win.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
