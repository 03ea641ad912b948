use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// Emit one move per target square, recording whatever stands on the target
/// as the captured piece. `targets` must already exclude friendly squares.
#[inline]
pub fn push_target_moves(position: &Position, from: Square, targets: u64, out: &mut Vec<Move>) {
    for to in Square::iter_bits(targets) {
        out.push(Move::new(from, to, position.piece_at(to)));
    }
}
