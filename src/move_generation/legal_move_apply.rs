//! Make/unmake of a single move on a `Position`.
//!
//! `apply_move` edits the grid, updates the castling flags and en passant
//! target, flips the side to move, and returns an `UndoState` snapshot of
//! everything it overwrote. `retract_move` consumes that snapshot, so a
//! retraction restores the prior position exactly.

use log::trace;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{CastleGeometry, LONG_CASTLE, SHORT_CASTLE};
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::Move;

pub fn apply_move(position: &mut Position, mv: &Move) -> ChessResult<UndoState> {
    let (Some(from), Some(to)) = (mv.start, mv.end) else {
        return Err(ChessError::NullMove);
    };
    if position.piece_at(from).is_none() {
        return Err(ChessError::EmptyStartSquare(from));
    }

    Ok(make_move_unchecked(position, from, to, mv))
}

/// Clone-and-apply, leaving `position` untouched.
pub fn position_after(position: &Position, mv: &Move) -> ChessResult<Position> {
    let mut next = position.clone();
    apply_move(&mut next, mv)?;
    Ok(next)
}

/// Apply a move whose squares are known and whose start square is occupied.
pub(crate) fn make_move_unchecked(
    position: &mut Position,
    from: Square,
    to: Square,
    mv: &Move,
) -> UndoState {
    let moved_piece = position.piece_at(from);
    let mover = moved_piece.color().unwrap_or(position.side_to_move);
    let captured_square = if mv.en_passant {
        Square::from_indices(to.file(), from.rank())
    } else {
        to
    };

    let undo = UndoState {
        moved_piece,
        captured_piece: position.piece_at(captured_square),
        captured_square,
        prev_castling: position.castling,
        prev_en_passant_target: position.en_passant_target,
        prev_side_to_move: position.side_to_move,
    };

    position.set_piece(from, Piece::NONE);
    if mv.en_passant {
        position.set_piece(captured_square, Piece::NONE);
    }

    let placed = match mv.promotion.piece_type() {
        Some(piece_type) => Piece::new(mover, piece_type),
        None => moved_piece,
    };
    position.set_piece(to, placed);

    if let Some(geometry) = castle_geometry(mv) {
        let rank = from.rank();
        let rook_from = Square::from_indices(geometry.rook_from, rank);
        let rook = position.set_piece(rook_from, Piece::NONE);
        position.set_piece(Square::from_indices(geometry.rook_to, rank), rook);
        position.castling.mark_square_touched(rook_from);
    }

    if moved_piece.is_king() {
        position.castling.mark_king_moved(mover);
    }
    position.castling.mark_square_touched(from);
    position.castling.mark_square_touched(to);

    position.en_passant_target = double_step_target(moved_piece, from, to);
    position.side_to_move = undo.prev_side_to_move.opposite();

    trace!("applied {mv} ({:?} moved, {:?} captured)", moved_piece, undo.captured_piece);
    undo
}

/// Undo `mv` using the token `apply_move` returned for it.
pub fn retract_move(position: &mut Position, mv: &Move, undo: UndoState) {
    let (Some(from), Some(to)) = (mv.start, mv.end) else {
        // The applier rejects null moves, so no token exists for one.
        return;
    };

    if let Some(geometry) = castle_geometry(mv) {
        let rank = from.rank();
        let rook = position.set_piece(Square::from_indices(geometry.rook_to, rank), Piece::NONE);
        position.set_piece(Square::from_indices(geometry.rook_from, rank), rook);
    }

    position.set_piece(to, Piece::NONE);
    position.set_piece(undo.captured_square, undo.captured_piece);
    position.set_piece(from, undo.moved_piece);

    position.castling = undo.prev_castling;
    position.en_passant_target = undo.prev_en_passant_target;
    position.side_to_move = undo.prev_side_to_move;

    trace!("retracted {mv}");
}

#[inline]
fn castle_geometry(mv: &Move) -> Option<&'static CastleGeometry> {
    if mv.short_castle {
        Some(&SHORT_CASTLE)
    } else if mv.long_castle {
        Some(&LONG_CASTLE)
    } else {
        None
    }
}

fn double_step_target(moved_piece: Piece, from: Square, to: Square) -> Option<Square> {
    if !moved_piece.is_pawn() || from.file() != to.file() || from.rank().abs_diff(to.rank()) != 2 {
        return None;
    }
    Some(Square::from_indices(from.file(), (from.rank() + to.rank()) / 2))
}

#[cfg(test)]
mod tests {
    use super::{apply_move, position_after, retract_move};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::piece::Piece;
    use crate::game_state::position::Position;
    use crate::moves::chess_move::Move;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn mv(from: &str, to: &str, captured: Piece) -> Move {
        Move::new(sq(from), sq(to), captured)
    }

    fn round_trip(position: &mut Position, m: Move) -> Position {
        let before = position.clone();
        let undo = apply_move(position, &m).expect("move should apply");
        let after = position.clone();
        retract_move(position, &m, undo);
        assert_eq!(*position, before, "retracting {m} should restore the position");
        after
    }

    #[test]
    fn double_push_sets_en_passant_target_and_flips_turn() {
        let mut position = Position::new_game();
        let after = round_trip(&mut position, mv("e2", "e4", Piece::NONE));

        assert_eq!(after["e4"], Piece::WHITE_PAWN);
        assert!(after["e2"].is_none());
        assert_eq!(after.en_passant_target, Some(sq("e3")));
        assert_eq!(after.side_to_move, Color::Black);

        let mut next = after.clone();
        apply_move(&mut next, &mv("g8", "f6", Piece::NONE)).expect("knight move applies");
        assert_eq!(next.en_passant_target, None);
    }

    #[test]
    fn en_passant_clears_the_pawn_beside_the_destination() {
        let mut position = Position::new_empty();
        position.set("e5", Piece::WHITE_PAWN);
        position.set("d5", Piece::BLACK_PAWN);
        position.en_passant_target = Some(sq("d6"));

        let capture = Move {
            en_passant: true,
            ..mv("e5", "d6", Piece::BLACK_PAWN)
        };
        let after = round_trip(&mut position, capture);
        assert_eq!(after["d6"], Piece::WHITE_PAWN);
        assert!(after["d5"].is_none());
        assert!(after["e5"].is_none());
        assert_eq!(after.en_passant_target, None);
    }

    #[test]
    fn castling_moves_king_and_rook() {
        let mut position = Position::new_empty();
        position.set("e8", Piece::BLACK_KING);
        position.set("a8", Piece::BLACK_ROOK);
        position.set("h8", Piece::BLACK_ROOK);
        position.side_to_move = Color::Black;

        let long = Move {
            long_castle: true,
            ..mv("e8", "c8", Piece::NONE)
        };
        let after = round_trip(&mut position, long);
        assert_eq!(after["c8"], Piece::BLACK_KING);
        assert_eq!(after["d8"], Piece::BLACK_ROOK);
        assert!(after["a8"].is_none() && after["e8"].is_none());
        assert_eq!(after["h8"], Piece::BLACK_ROOK);
        assert!(after.castling.black_king_moved);
        assert!(after.castling.a8_rook_moved);
        assert!(!after.castling.h8_rook_moved);

        let short = Move {
            short_castle: true,
            ..mv("e8", "g8", Piece::NONE)
        };
        let after = round_trip(&mut position, short);
        assert_eq!(after["g8"], Piece::BLACK_KING);
        assert_eq!(after["f8"], Piece::BLACK_ROOK);
        assert!(after["h8"].is_none());
    }

    #[test]
    fn castling_spends_the_rook_corner_and_retract_restores_it() {
        let mut position = Position::new_empty();
        position.set("e1", Piece::WHITE_KING);
        position.set("h1", Piece::WHITE_ROOK);
        position.set("a1", Piece::WHITE_ROOK);

        let short = Move {
            short_castle: true,
            ..mv("e1", "g1", Piece::NONE)
        };
        let after = round_trip(&mut position, short);
        assert!(after.castling.h1_rook_moved);
        assert!(after.castling.white_king_moved);
        assert!(!after.castling.a1_rook_moved);
        assert!(!position.castling.h1_rook_moved);

        let long = Move {
            long_castle: true,
            ..mv("e1", "c1", Piece::NONE)
        };
        let after = round_trip(&mut position, long);
        assert!(after.castling.a1_rook_moved);
        assert!(!after.castling.h1_rook_moved);
    }

    #[test]
    fn promotion_keeps_the_movers_color() {
        let mut position = Position::new_empty();
        position.set("g7", Piece::WHITE_PAWN);
        position.set("h8", Piece::BLACK_ROOK);

        let promote = Move {
            promotion: Piece::WHITE_QUEEN,
            ..mv("g7", "h8", Piece::BLACK_ROOK)
        };
        let after = round_trip(&mut position, promote);
        assert_eq!(after["h8"], Piece::WHITE_QUEEN);
        assert!(after.castling.h8_rook_moved, "capturing on h8 spends the rook right");
        assert!(!after.castling.a8_rook_moved);
    }

    #[test]
    fn rook_moves_spend_their_corner_only() {
        let position = Position::new_game();
        let mut position = position_after(&position, &mv("h2", "h4", Piece::NONE))
            .expect("h2h4 applies");
        position.side_to_move = Color::White;
        let after = round_trip(&mut position, mv("h1", "h3", Piece::NONE));
        assert!(after.castling.h1_rook_moved);
        assert!(!after.castling.a1_rook_moved);
        assert!(!after.castling.white_king_moved);
    }

    #[test]
    fn flags_stay_set_once_spent() {
        let mut position = Position::new_empty();
        position.set("e1", Piece::WHITE_KING);
        position.set("e8", Piece::BLACK_KING);

        apply_move(&mut position, &mv("e1", "e2", Piece::NONE)).expect("king steps up");
        apply_move(&mut position, &mv("e8", "e7", Piece::NONE)).expect("king steps up");
        apply_move(&mut position, &mv("e2", "e1", Piece::NONE)).expect("king steps back");
        assert!(position.castling.white_king_moved);
        assert!(position.castling.black_king_moved);
    }

    #[test]
    fn rejects_null_and_empty_start() {
        let mut position = Position::new_game();
        assert_eq!(apply_move(&mut position, &Move::default()), Err(ChessError::NullMove));
        assert_eq!(
            apply_move(&mut position, &mv("e4", "e5", Piece::NONE)),
            Err(ChessError::EmptyStartSquare(sq("e4")))
        );
        assert_eq!(position, Position::new_game());
    }
}
