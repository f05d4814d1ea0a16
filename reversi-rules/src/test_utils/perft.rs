//! "Perft" move-path test: count the leaves of the game tree at a given depth.
//! A pass counts as a ply, and two passes in a row end the game.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Game, GameConfig, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::default(), depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let game = Game::from_position(board, player, &GameConfig::default());
    let moves = game.legal_moves(player);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    moves
        .into_iter()
        .filter_map(|mv| {
            let mut child = game.clone();
            child.apply_move(mv).ok()?;
            Some(leaves_below(*child.board(), !player, depth - 1, false))
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}
