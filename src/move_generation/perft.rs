//! Perft: exhaustive legal-move tree counts used to validate the generator
//! and applier against published reference numbers.

use std::thread;

use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{make_move_unchecked, retract_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;

/// Leaf statistics. Every field except `nodes` counts leaf moves of that kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Single-threaded perft using make/unmake on one working copy.
pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut working = position.clone();
    let mut counts = PerftCounts::default();
    perft_recurse(&mut working, depth, &mut counts);
    debug!("perft depth {depth}: {} nodes", counts.nodes);
    counts
}

/// Perft with one worker thread per root move. Each worker owns its own
/// clone of the position.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(perft(position, 0));
    }

    let root_moves = generate_legal_moves(position);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut child = position.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            descend(&mut child, &mv, depth, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| ChessError::WorkerPanicked)?;
        total.merge(local);
    }

    debug!("threaded perft depth {depth}: {} nodes", total.nodes);
    Ok(total)
}

fn perft_recurse(position: &mut Position, depth: u8, counts: &mut PerftCounts) {
    for mv in generate_legal_moves(position) {
        descend(position, &mv, depth, counts);
    }
}

/// Play `mv`, count the subtree `depth - 1` plies below it, and take it back.
fn descend(position: &mut Position, mv: &Move, depth: u8, counts: &mut PerftCounts) {
    let (Some(from), Some(to)) = (mv.start, mv.end) else {
        return;
    };

    let undo = make_move_unchecked(position, from, to, mv);
    if depth <= 1 {
        tally_leaf(position, mv, counts);
    } else {
        perft_recurse(position, depth - 1, counts);
    }
    retract_move(position, mv, undo);
}

fn tally_leaf(after: &Position, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }
    if is_in_check(after, after.side_to_move) {
        counts.checks += 1;
        if generate_legal_moves(after).is_empty() {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::game_state::position::Position;
    use crate::test_support::{kiwipete, rook_pawn_endgame};

    #[test]
    fn perft_depth_zero_counts_single_node() {
        assert_eq!(
            perft(&Position::new_game(), 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let game = Position::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth3 = perft(&game, 3);
        assert_eq!(
            depth3,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let position = kiwipete();
        assert_eq!(
            perft(&position, 1),
            PerftCounts {
                nodes: 48,
                captures: 8,
                castles: 2,
                ..PerftCounts::default()
            }
        );
        assert_eq!(
            perft(&position, 2),
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                checks: 3,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn rook_pawn_endgame_counts() {
        let position = rook_pawn_endgame();
        assert_eq!(perft(&position, 1).nodes, 14);
        assert_eq!(perft(&position, 2).nodes, 191);

        let depth3 = perft(&position, 3);
        assert_eq!(depth3.nodes, 2812);
        assert_eq!(depth3.captures, 209);
        assert_eq!(depth3.en_passant, 2);
        assert_eq!(depth3.checks, 267);
    }

    #[test]
    fn threaded_perft_matches_single_threaded() {
        let position = kiwipete();
        let threaded = perft_multi_threaded(&position, 2).expect("threaded perft should run");
        assert_eq!(threaded, perft(&position, 2));
        assert_eq!(
            perft_multi_threaded(&position, 0).expect("depth zero runs"),
            perft(&position, 0)
        );
    }

    #[test]
    fn perft_leaves_the_input_untouched() {
        let position = kiwipete();
        let before = position.clone();
        let _ = perft(&position, 2);
        assert_eq!(position, before);
    }
}
