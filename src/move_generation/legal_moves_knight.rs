use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::attack_tables::knight_attacks;
use crate::moves::chess_move::Move;

/// Pseudo-legal knight moves from `from`. `own_occ` is the mover's occupancy.
pub fn generate_knight_moves(position: &Position, from: Square, own_occ: u64, out: &mut Vec<Move>) {
    push_target_moves(position, from, knight_attacks(from) & !own_occ, out);
}
