//! Attack and check detection.
//!
//! A square is attacked by a color when one of that color's pieces could
//! capture on it, ignoring whether doing so would expose its own king. The
//! test runs backwards from the target square through the attack tables.

use crate::game_state::chess_types::{Color, PieceType, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};

/// Every square holding a king of `color`, in scan order. Positions built by
/// hand may hold zero or several.
pub fn king_squares(position: &Position, color: Color) -> Vec<Square> {
    let king = Piece::new(color, PieceType::King);
    position
        .occupied_squares()
        .filter(|(_, piece)| *piece == king)
        .map(|(square, _)| square)
        .collect()
}

pub fn is_square_attacked(position: &Position, square: Square, attacker: Color) -> bool {
    let holds = |targets: u64, piece_type: PieceType| {
        let wanted = Piece::new(attacker, piece_type);
        Square::iter_bits(targets).any(|from| position.piece_at(from) == wanted)
    };

    // A pawn of `attacker` hits `square` from where a defender pawn on
    // `square` would capture.
    if holds(pawn_attacks(attacker.opposite(), square), PieceType::Pawn) {
        return true;
    }
    if holds(knight_attacks(square), PieceType::Knight) {
        return true;
    }
    if holds(king_attacks(square), PieceType::King) {
        return true;
    }

    let occupancy = position.occupancy();
    let diagonal = bishop_attacks(square, occupancy);
    if holds(diagonal, PieceType::Bishop) || holds(diagonal, PieceType::Queen) {
        return true;
    }
    let straight = rook_attacks(square, occupancy);
    holds(straight, PieceType::Rook) || holds(straight, PieceType::Queen)
}

/// True when any king of `color` is attacked. A side without a king is
/// never in check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    king_squares(position, color)
        .into_iter()
        .any(|king| is_square_attacked(position, king, color.opposite()))
}
