use std::fmt;

use crate::error::Error;
use crate::types::*;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals, as flat indices.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 board plus the side to move.
///
/// Owned by the caller; searches borrow it for the duration of one call and
/// restore it via the matching `undo` before returning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub cells: [Option<Player>; TOTAL_CELLS as usize],
    pub to_move: Player,
}

impl Board {
    /// Empty board with the given first player.
    pub fn new(first_player: Player) -> Self {
        Self {
            cells: [None; TOTAL_CELLS as usize],
            to_move: first_player,
        }
    }

    /// Parse a `"X.X/XO./O.."` row notation.
    ///
    /// Rows are `/`-separated, top to bottom; `X` and `O` are marks, `.` is
    /// an empty cell. Panics on malformed input, mirroring a FEN-style
    /// constructor intended for tests and fixed setups.
    pub fn from_grid(grid: &str, to_move: Player) -> Self {
        let rows: Vec<&str> = grid.split('/').collect();
        assert!(rows.len() == SIZE as usize, "expected {SIZE} rows in grid");

        let mut cells = [None; TOTAL_CELLS as usize];
        for (r, row) in rows.iter().enumerate() {
            assert!(
                row.chars().count() == SIZE as usize,
                "expected {SIZE} cells in grid row {r}"
            );
            for (c, ch) in row.chars().enumerate() {
                cells[r * SIZE as usize + c] = match ch {
                    'X' => Some(Player::X),
                    'O' => Some(Player::O),
                    '.' => None,
                    _ => panic!("invalid cell char in grid: {ch}"),
                };
            }
        }

        Self { cells, to_move }
    }

    pub fn mark_at(&self, cell: Cell) -> Option<Player> {
        self.cells[cell.index()]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| m.is_some())
    }

    /// Place the side-to-move's mark and flip the turn.
    ///
    /// Fails with `InvalidMove` if the target is occupied or out of range.
    pub fn apply(&mut self, cell: Cell) -> Result<(), Error> {
        if !cell.in_bounds() || self.cells[cell.index()].is_some() {
            return Err(Error::InvalidMove {
                row: cell.row,
                col: cell.col,
            });
        }
        self.cells[cell.index()] = Some(self.to_move);
        self.to_move = self.to_move.other();
        Ok(())
    }

    /// Clear a cell and flip the turn back.
    ///
    /// Only valid immediately after the matching `apply` in the same search
    /// branch (stack discipline, not a general-purpose operation).
    pub fn undo(&mut self, cell: Cell) {
        self.cells[cell.index()] = None;
        self.to_move = self.to_move.other();
    }

    /// Terminal evaluation: a completed line, a filled draw, or ongoing.
    ///
    /// Fixed 8-line check; boards with two simultaneous completed lines are
    /// unreachable under correct play and yield the first matching line.
    pub fn winner(&self) -> Outcome {
        for line in &WIN_LINES {
            if let Some(mark) = self.cells[line[0]]
                && self.cells[line[1]] == Some(mark)
                && self.cells[line[2]] == Some(mark)
            {
                return Outcome::Win(mark);
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}

impl fmt::Display for Board {
    /// Renders marks and 1-9 digit placeholders for empty cells:
    ///
    /// ```text
    /// X|2|3
    /// -----
    /// 4|O|6
    /// -----
    /// 7|8|9
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..SIZE as usize {
            for c in 0..SIZE as usize {
                let i = r * SIZE as usize + c;
                let ch = match self.cells[i] {
                    Some(mark) => mark.as_char(),
                    None => (b'1' + i as u8) as char,
                };
                write!(f, "{ch}")?;
                if c < SIZE as usize - 1 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if r < SIZE as usize - 1 {
                writeln!(f, "-----")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
