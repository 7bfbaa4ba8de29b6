//! Minimax search with alpha-beta pruning and depth-sensitive scoring

use rand::seq::SliceRandom;
use rand::thread_rng;

use tictactoe_core::{
    empty_cells_into, Board, Cell, Error, Outcome, Player, SearchLimits, TOTAL_CELLS,
};

/// Searches the board and returns the best move with its score for the
/// side to move.
///
/// # Arguments
/// * `board` - The position to search; borrowed, never retained
/// * `limits` - Depth cap and root sampling (both explicit approximations)
/// * `nodes` - Counter for recursive evaluator entries
///
/// # Errors
/// `NoMovesAvailable` if the board has no empty cells. Callers should
/// check for a terminal state before invoking the search.
pub fn pick_best_move(
    board: &Board,
    limits: &SearchLimits,
    nodes: &mut u64,
) -> Result<(Cell, i32), Error> {
    let ai = board.to_move;
    let mut tmp = board.clone();
    let mut moves = Vec::with_capacity(TOTAL_CELLS as usize);
    empty_cells_into(&tmp, &mut moves);

    if moves.is_empty() {
        return Err(Error::NoMovesAvailable);
    }

    // Forced move: score the resulting board directly, no recursion.
    if moves.len() == 1 {
        let cell = moves[0];
        tmp.apply(cell)?;
        let score = terminal_score(tmp.winner(), ai, 0);
        return Ok((cell, score));
    }

    // Requested root sampling: keep a uniform random subset of candidates.
    if let Some(samples) = limits.root_samples {
        if samples < moves.len() {
            moves.shuffle(&mut thread_rng());
            moves.truncate(samples);
        }
    }

    let mut best = moves[0];
    let mut best_score = i32::MIN;

    for cell in moves {
        tmp.apply(cell)?;
        let score = minimax(&mut tmp, ai, false, i32::MIN, i32::MAX, 0, limits, nodes);
        tmp.undo(cell);

        // Strict improvement keeps the earliest candidate on ties
        if score > best_score {
            best_score = score;
            best = cell;
        }
    }

    Ok((best, best_score))
}

/// Score for a decided board seen at `depth` plies below the root move:
/// faster wins score higher, slower losses score less negative.
fn terminal_score(outcome: Outcome, ai: Player, depth: i32) -> i32 {
    match outcome {
        Outcome::Win(winner) if winner == ai => TOTAL_CELLS - depth,
        Outcome::Win(_) => -(TOTAL_CELLS - depth),
        _ => 0,
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Maximizing layers are the AI's turns; the score is anchored to `ai`
/// rather than the side to move.
#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &mut Board,
    ai: Player,
    is_max: bool,
    mut alpha: i32,
    mut beta: i32,
    depth: i32,
    limits: &SearchLimits,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    // Requested depth cap: nodes beyond it score neutral
    if let Some(cap) = limits.max_depth {
        if depth >= cap as i32 {
            return 0;
        }
    }

    let outcome = board.winner();
    if outcome != Outcome::Ongoing {
        return terminal_score(outcome, ai, depth);
    }

    let mut moves = Vec::with_capacity(TOTAL_CELLS as usize);
    empty_cells_into(board, &mut moves);

    if is_max {
        let mut highest = i32::MIN;
        for cell in moves {
            board
                .apply(cell)
                .expect("empty_cells only yields legal moves");
            let score = minimax(board, ai, false, alpha, beta, depth + 1, limits, nodes);
            board.undo(cell);

            if score > highest {
                highest = score;
            }
            if highest > alpha {
                alpha = highest;
            }
            if beta <= alpha {
                break;
            }
        }
        highest
    } else {
        let mut lowest = i32::MAX;
        for cell in moves {
            board
                .apply(cell)
                .expect("empty_cells only yields legal moves");
            let score = minimax(board, ai, true, alpha, beta, depth + 1, limits, nodes);
            board.undo(cell);

            if score < lowest {
                lowest = score;
            }
            if lowest < beta {
                beta = lowest;
            }
            if beta <= alpha {
                break;
            }
        }
        lowest
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
