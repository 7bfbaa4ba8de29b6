use crate::board::Board;
use crate::movegen::empty_cells_into;
use crate::types::{Cell, Outcome, TOTAL_CELLS};

/// Pure perft node count.
/// Counts positions at exactly `depth` plies from the current one, with
/// play stopping at terminal states: a decided board contributes no deeper
/// positions.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Cell>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        if board.winner() != Outcome::Ongoing {
            return 0;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        empty_cells_into(board, buf);

        let mut nodes = 0u64;
        for cell in buf.iter().copied() {
            board
                .apply(cell)
                .expect("empty_cells only yields legal moves");
            nodes += inner(board, depth - 1, rest);
            board.undo(cell);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(TOTAL_CELLS as usize); depth as usize];
    inner(board, depth, &mut layers[..])
}
