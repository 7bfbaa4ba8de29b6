use crate::board::Board;
use crate::types::{Cell, TOTAL_CELLS};

/// Enumerate all empty cells, returning a freshly allocated vector.
/// Internally delegates to `empty_cells_into`.
pub fn empty_cells(board: &Board) -> Vec<Cell> {
    let mut out = Vec::with_capacity(TOTAL_CELLS as usize);
    empty_cells_into(board, &mut out);
    out
}

/// Enumerate all empty cells into the provided buffer, reusing it across
/// calls. Row-major order, deterministic, no duplicates.
pub fn empty_cells_into(board: &Board, out: &mut Vec<Cell>) {
    out.clear();
    for (i, mark) in board.cells.iter().enumerate() {
        if mark.is_none() {
            out.push(Cell::from_index(i));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
