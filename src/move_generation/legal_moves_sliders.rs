//! Bishop, rook and queen moves: rays stop at the board edge, before a
//! friendly piece, or on an enemy piece (which becomes the capture).

use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(
    position: &Position,
    from: Square,
    occupancy: u64,
    own_occ: u64,
    out: &mut Vec<Move>,
) {
    push_target_moves(position, from, bishop_attacks(from, occupancy) & !own_occ, out);
}

pub fn generate_rook_moves(
    position: &Position,
    from: Square,
    occupancy: u64,
    own_occ: u64,
    out: &mut Vec<Move>,
) {
    push_target_moves(position, from, rook_attacks(from, occupancy) & !own_occ, out);
}

pub fn generate_queen_moves(
    position: &Position,
    from: Square,
    occupancy: u64,
    own_occ: u64,
    out: &mut Vec<Move>,
) {
    push_target_moves(position, from, queen_attacks(from, occupancy) & !own_occ, out);
}
