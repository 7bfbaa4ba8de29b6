use super::*;
use tictactoe_core::empty_cells;

#[test]
fn blocks_immediate_loss() {
    // X threatens the top row; O's only non-losing move is the block.
    let board = Board::from_grid("X.X/XO./O..", Player::O);
    let mut nodes = 0;
    let (best, score) = pick_best_move(&board, &SearchLimits::exhaustive(), &mut nodes).unwrap();
    assert_eq!(best, Cell::new(0, 1));
    assert_eq!(score, 0, "blocking holds a draw under optimal opposition");
    assert!(nodes > 0);
}

#[test]
fn takes_immediate_win() {
    let board = Board::from_grid("XX./OO./...", Player::X);
    let mut nodes = 0;
    let (best, score) = pick_best_move(&board, &SearchLimits::exhaustive(), &mut nodes).unwrap();
    assert_eq!(best, Cell::new(0, 2));
    assert_eq!(score, 9);
}

#[test]
fn faster_wins_score_strictly_higher() {
    // Win on the next move
    let now = Board::from_grid("XX./OO./...", Player::X);
    let mut nodes = 0;
    let (_, immediate) = pick_best_move(&now, &SearchLimits::exhaustive(), &mut nodes).unwrap();

    // Best play is a fork at (0, 2): O blocks one threat, X wins on the
    // third ply.
    let fork = Board::from_grid("X../.O./..X", Player::X);
    let (best, forced) = pick_best_move(&fork, &SearchLimits::exhaustive(), &mut nodes).unwrap();
    assert_eq!(best, Cell::new(0, 2));
    assert_eq!(forced, 7);

    assert!(immediate > forced);
}

#[test]
fn empty_board_is_a_draw_for_the_first_player() {
    let board = Board::new(Player::X);
    let mut nodes = 0;
    let (best, score) = pick_best_move(&board, &SearchLimits::exhaustive(), &mut nodes).unwrap();
    assert_eq!(score, 0, "no forced win exists against a perfect opponent");

    let corners_and_center = [
        Cell::new(0, 0),
        Cell::new(0, 2),
        Cell::new(1, 1),
        Cell::new(2, 0),
        Cell::new(2, 2),
    ];
    assert!(corners_and_center.contains(&best));
}

#[test]
fn forced_move_skips_the_search() {
    // One empty cell left; taking it wins the game.
    let board = Board::from_grid("OXX/XOX/OO.", Player::X);
    let mut nodes = 0;
    let (best, score) = pick_best_move(&board, &SearchLimits::exhaustive(), &mut nodes).unwrap();
    assert_eq!(best, Cell::new(2, 2));
    assert_eq!(score, 9);
    assert_eq!(nodes, 0, "forced moves must not recurse");
}

#[test]
fn forced_move_into_a_draw_scores_neutral() {
    let board = Board::from_grid("XXO/OOX/XO.", Player::X);
    let mut nodes = 0;
    let (best, score) = pick_best_move(&board, &SearchLimits::exhaustive(), &mut nodes).unwrap();
    assert_eq!(best, Cell::new(2, 2));
    assert_eq!(score, 0);
    assert_eq!(nodes, 0);
}

#[test]
fn full_board_has_no_moves() {
    let board = Board::from_grid("XOX/XXO/OXO", Player::X);
    let mut nodes = 0;
    let err = pick_best_move(&board, &SearchLimits::exhaustive(), &mut nodes).unwrap_err();
    assert_eq!(err, Error::NoMovesAvailable);
}

#[test]
fn depth_capped_search_still_takes_immediate_wins() {
    let board = Board::from_grid("XX./OO./...", Player::X);
    let mut nodes = 0;
    let (best, score) = pick_best_move(&board, &SearchLimits::depth(1), &mut nodes).unwrap();
    assert_eq!(best, Cell::new(0, 2));
    assert_eq!(score, 9);
}

#[test]
fn sampled_roots_always_return_legal_moves() {
    let board = Board::from_grid("X.O/.X./O..", Player::X);
    let legal = empty_cells(&board);
    for _ in 0..20 {
        let mut nodes = 0;
        let (best, _) = pick_best_move(&board, &SearchLimits::handicap(), &mut nodes).unwrap();
        assert!(legal.contains(&best));
    }
}

#[test]
fn self_play_from_empty_board_always_draws() {
    for first in [Player::X, Player::O] {
        let mut board = Board::new(first);
        while board.winner() == Outcome::Ongoing {
            let mut nodes = 0;
            let (best, _) =
                pick_best_move(&board, &SearchLimits::exhaustive(), &mut nodes).unwrap();
            board.apply(best).unwrap();
        }
        assert_eq!(board.winner(), Outcome::Draw, "first player {first:?}");
    }
}
