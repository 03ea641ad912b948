use crate::game_state::chess_rules::{CastleGeometry, KING_START_FILE, LONG_CASTLE, SHORT_CASTLE};
use crate::game_state::chess_types::{Color, PieceType, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::attack_tables::king_attacks;
use crate::moves::chess_move::Move;

pub fn generate_king_moves(
    position: &Position,
    from: Square,
    color: Color,
    own_occ: u64,
    out: &mut Vec<Move>,
) {
    push_target_moves(position, from, king_attacks(from) & !own_occ, out);

    if from != Square::from_indices(KING_START_FILE, color.home_rank())
        || position.castling.king_moved(color)
    {
        return;
    }

    if castle_allowed(position, color, &SHORT_CASTLE) {
        out.push(castle_move(from, color, &SHORT_CASTLE, true));
    }
    if castle_allowed(position, color, &LONG_CASTLE) {
        out.push(castle_move(from, color, &LONG_CASTLE, false));
    }
}

/// Rook unmoved and in place, path empty, and no square the king stands on,
/// crosses or reaches is attacked.
fn castle_allowed(position: &Position, color: Color, geometry: &CastleGeometry) -> bool {
    let rank = color.home_rank();
    if position.castling.rook_moved(color, geometry.rook_from) {
        return false;
    }
    if position.piece_at(Square::from_indices(geometry.rook_from, rank))
        != Piece::new(color, PieceType::Rook)
    {
        return false;
    }

    let path_clear = geometry
        .empty_files
        .iter()
        .all(|&file| position.piece_at(Square::from_indices(file, rank)).is_none());
    if !path_clear {
        return false;
    }

    let enemy = color.opposite();
    geometry
        .safe_files
        .iter()
        .all(|&file| !is_square_attacked(position, Square::from_indices(file, rank), enemy))
}

fn castle_move(from: Square, color: Color, geometry: &CastleGeometry, short: bool) -> Move {
    let to = Square::from_indices(geometry.king_to, color.home_rank());
    Move {
        short_castle: short,
        long_castle: !short,
        ..Move::new(from, to, Piece::NONE)
    }
}
