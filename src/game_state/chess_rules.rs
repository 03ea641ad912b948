//! Canonical chess-rule constants: the starting arrangement and the fixed
//! squares involved in castling.

use crate::game_state::chess_types::{Color, PieceType};

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

pub const KING_START_FILE: u8 = 4;

/// Squares of one castling move on a side's back rank, as file indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub king_to: u8,
    pub rook_from: u8,
    pub rook_to: u8,
    /// Files that must be empty between king and rook.
    pub empty_files: &'static [u8],
    /// Files the king stands on, crosses or lands on; none may be attacked.
    pub safe_files: &'static [u8],
}

pub static SHORT_CASTLE: CastleGeometry = CastleGeometry {
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
    empty_files: &[5, 6],
    safe_files: &[4, 5, 6],
};

pub static LONG_CASTLE: CastleGeometry = CastleGeometry {
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
    empty_files: &[1, 2, 3],
    safe_files: &[4, 3, 2],
};

/// Rank a pawn of `color` double-steps from.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Rank a pawn of `color` promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}
