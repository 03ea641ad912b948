//! Full legal move generation pipeline.
//!
//! Squares are scanned file-major, rank ascending (a1, a2, .., h8). Each
//! piece of the side to move emits its pseudo-legal moves in a fixed order,
//! so the output sequence is reproducible. Every candidate is then tried on a
//! scratch copy of the position and kept only if no king of the mover is
//! attacked afterwards. A side with no king keeps every pseudo-legal move.

use log::{debug, warn};

use crate::game_state::chess_types::PieceType;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{make_move_unchecked, retract_move};
use crate::move_generation::legal_move_checks::{is_in_check, king_squares};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::chess_move::Move;

/// Moves obeying piece movement rules, before the king-safety filter.
pub fn generate_pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let side = position.side_to_move;
    let occupancy = position.occupancy();
    let own_occ = position.occupancy_of(side);
    let mut out = Vec::with_capacity(64);

    for (from, piece) in position.occupied_squares() {
        if !piece.is_color(side) {
            continue;
        }
        match piece.piece_type() {
            Some(PieceType::Pawn) => generate_pawn_moves(position, from, side, &mut out),
            Some(PieceType::Knight) => generate_knight_moves(position, from, own_occ, &mut out),
            Some(PieceType::Bishop) => {
                generate_bishop_moves(position, from, occupancy, own_occ, &mut out)
            }
            Some(PieceType::Rook) => {
                generate_rook_moves(position, from, occupancy, own_occ, &mut out)
            }
            Some(PieceType::Queen) => {
                generate_queen_moves(position, from, occupancy, own_occ, &mut out)
            }
            Some(PieceType::King) => generate_king_moves(position, from, side, own_occ, &mut out),
            None => {}
        }
    }

    out
}

/// Every move for the side to move that leaves none of its kings attacked.
/// An empty result means checkmate or stalemate.
pub fn generate_legal_moves(position: &Position) -> Vec<Move> {
    let side = position.side_to_move;
    let king_count = king_squares(position, side).len();
    if king_count != 1 {
        warn!("generating moves for {side:?} with {king_count} kings on the board");
    }

    let pseudo = generate_pseudo_legal_moves(position);
    let mut scratch = position.clone();
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        let (Some(from), Some(to)) = (mv.start, mv.end) else {
            continue;
        };
        let undo = make_move_unchecked(&mut scratch, from, to, &mv);
        let exposes_king = is_in_check(&scratch, side);
        retract_move(&mut scratch, &mv, undo);

        if !exposes_king {
            legal.push(mv);
        }
    }

    debug!("{} legal moves for {side:?}", legal.len());
    legal
}
