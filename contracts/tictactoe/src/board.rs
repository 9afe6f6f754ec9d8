//! Board layout and win detection.
//!
//! The board is stored as nine cells in row-major order. Coordinates are
//! 1-based: `(x, y)` lives at index `(x - 1) * 3 + (y - 1)`.

use soroban_sdk::{contracttype, Env, Vec};

pub const BOARD_SIZE: u32 = 3;
pub const CELL_COUNT: u32 = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single square. `Player1` and `Player2` are the marks of the
/// inviter and the invitee respectively.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Cell {
    Empty = 0,
    Player1 = 1,
    Player2 = 2,
}

pub type Cells = [Cell; CELL_COUNT as usize];

const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

pub fn empty(env: &Env) -> Vec<Cell> {
    let mut board = Vec::new(env);
    for _ in 0..CELL_COUNT {
        board.push_back(Cell::Empty);
    }
    board
}

/// Maps 1-based coordinates to a board index, or `None` when off the board.
pub fn index(x: u32, y: u32) -> Option<u32> {
    if (1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y) {
        Some((x - 1) * BOARD_SIZE + (y - 1))
    } else {
        None
    }
}

/// Copies a stored board into a fixed array. Missing cells read as empty.
pub fn snapshot(board: &Vec<Cell>) -> Cells {
    let mut cells = [Cell::Empty; CELL_COUNT as usize];
    for (slot, cell) in cells.iter_mut().zip(board.iter()) {
        *slot = cell;
    }
    cells
}

/// Returns the mark that owns a complete row, column or diagonal.
///
/// With write-once cells and one mark per move, at most one player can hold a
/// line, so scan order does not affect the result.
pub fn evaluate(cells: &Cells) -> Option<Cell> {
    for [a, b, c] in LINES {
        let mark = cells[a];
        if mark != Cell::Empty && mark == cells[b] && mark == cells[c] {
            return Some(mark);
        }
    }
    None
}

pub fn is_full(cells: &Cells) -> bool {
    cells.iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Player1;
    const O: Cell = Cell::Player2;

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(evaluate(&[E; 9]), None);
    }

    #[test]
    fn every_line_is_detected() {
        for line in LINES {
            let mut cells = [E; 9];
            for i in line {
                cells[i] = O;
            }
            assert_eq!(evaluate(&cells), Some(O));
        }
    }

    #[test]
    fn mixed_line_does_not_win() {
        let cells = [X, X, O, E, E, E, E, E, E];
        assert_eq!(evaluate(&cells), None);
    }

    #[test]
    fn anti_diagonal_win_for_first_player() {
        let cells = [O, O, X, E, X, E, X, E, E];
        assert_eq!(evaluate(&cells), Some(X));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let cells = [X, O, X, X, O, O, O, X, X];
        assert_eq!(evaluate(&cells), None);
        assert!(is_full(&cells));
    }

    #[test]
    fn index_bounds() {
        assert_eq!(index(1, 1), Some(0));
        assert_eq!(index(2, 3), Some(5));
        assert_eq!(index(3, 3), Some(8));
        assert_eq!(index(0, 0), None);
        assert_eq!(index(4, 1), None);
        assert_eq!(index(1, 4), None);
    }
}
