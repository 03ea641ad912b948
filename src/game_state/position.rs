//! Mutable game state: the 8x8 grid plus the auxiliary flags needed for
//! castling, en passant and turn order.
//!
//! The grid is indexed `[file][rank]` with `a1 == [0][0]`. It stores whatever
//! `Piece` value it is given; use `Position::validate` on positions built from
//! untrusted input.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{pawn_start_rank, BACK_RANK_ORDER};
use crate::game_state::chess_types::{Color, PieceType, Square};
use crate::game_state::piece::Piece;
use crate::utils::algebraic::to_indices;
use crate::utils::render_position::render_position;

/// "Has moved" flags for the kings and the four corner rooks.
///
/// Once set a flag stays set until the whole position is reset. A rook flag
/// also covers the rook being captured or its corner being vacated by any
/// piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingFlags {
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    pub a1_rook_moved: bool,
    pub h1_rook_moved: bool,
    pub a8_rook_moved: bool,
    pub h8_rook_moved: bool,
}

impl CastlingFlags {
    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    /// Flag of the corner rook on `file` (0 or 7) of `color`'s back rank.
    /// Files other than the corners report `true`.
    pub fn rook_moved(&self, color: Color, file: u8) -> bool {
        match (color, file) {
            (Color::White, 0) => self.a1_rook_moved,
            (Color::White, 7) => self.h1_rook_moved,
            (Color::Black, 0) => self.a8_rook_moved,
            (Color::Black, 7) => self.h8_rook_moved,
            _ => true,
        }
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    /// Record that a piece left or landed on `square`. Only the four corner
    /// squares affect the flags.
    pub fn mark_square_touched(&mut self, square: Square) {
        match (square.file(), square.rank()) {
            (0, 0) => self.a1_rook_moved = true,
            (7, 0) => self.h1_rook_moved = true,
            (0, 7) => self.a8_rook_moved = true,
            (7, 7) => self.h8_rook_moved = true,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: [[Piece; 8]; 8],
    pub side_to_move: Color,
    pub castling: CastlingFlags,
    /// Square skipped by a pawn double step on the previous ply.
    pub en_passant_target: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [[Piece::NONE; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingFlags::default(),
            en_passant_target: None,
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let mut position = Self::default();
        position.reset_to_initial();
        position
    }

    /// Clear the grid and all flags; white to move.
    pub fn reset_to_empty(&mut self) {
        *self = Self::default();
    }

    /// Standard starting arrangement, no castling rights spent, white to move.
    pub fn reset_to_initial(&mut self) {
        self.reset_to_empty();
        for color in [Color::White, Color::Black] {
            let back_rank = color.home_rank();
            let pawn_rank = pawn_start_rank(color);
            for (file, piece_type) in BACK_RANK_ORDER.iter().enumerate() {
                let file = file as u8;
                self.board[file as usize][back_rank as usize] = Piece::new(color, *piece_type);
                self.board[file as usize][pawn_rank as usize] = Piece::new(color, PieceType::Pawn);
            }
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.board[square.file() as usize][square.rank() as usize]
    }

    /// Store `piece` on `square`, returning what was there.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Piece {
        std::mem::replace(
            &mut self.board[square.file() as usize][square.rank() as usize],
            piece,
        )
    }

    /// Piece at a text coordinate. Panics on a malformed coordinate.
    #[inline]
    pub fn get(&self, coordinate: &str) -> Piece {
        self[coordinate]
    }

    /// Store a piece at a text coordinate. Panics on a malformed coordinate.
    #[inline]
    pub fn set(&mut self, coordinate: &str, piece: Piece) {
        self[coordinate] = piece;
    }

    /// Occupied squares with their pieces, file-major then rank ascending
    /// (a1, a2, .., a8, b1, ..).
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |file| {
            (0..8u8).filter_map(move |rank| {
                let piece = self.board[file as usize][rank as usize];
                if piece.is_none() {
                    None
                } else {
                    Some((Square::from_indices(file, rank), piece))
                }
            })
        })
    }

    /// Bitboard of every occupied square.
    pub fn occupancy(&self) -> u64 {
        self.occupied_squares()
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    /// Bitboard of the squares holding a piece of `color`.
    pub fn occupancy_of(&self, color: Color) -> u64 {
        self.occupied_squares()
            .filter(|(_, piece)| piece.is_color(color))
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    /// Reject the first grid value that is not a well-formed piece.
    pub fn validate(&self) -> ChessResult<()> {
        match self.occupied_squares().find(|(_, piece)| !piece.is_valid()) {
            Some((square, piece)) => Err(ChessError::InvalidPiece {
                square,
                raw: piece.raw(),
            }),
            None => Ok(()),
        }
    }
}

impl Index<Square> for Position {
    type Output = Piece;

    fn index(&self, square: Square) -> &Piece {
        &self.board[square.file() as usize][square.rank() as usize]
    }
}

impl IndexMut<Square> for Position {
    fn index_mut(&mut self, square: Square) -> &mut Piece {
        &mut self.board[square.file() as usize][square.rank() as usize]
    }
}

impl Index<&str> for Position {
    type Output = Piece;

    fn index(&self, coordinate: &str) -> &Piece {
        let (file, rank) = to_indices(coordinate);
        &self.board[file as usize][rank as usize]
    }
}

impl IndexMut<&str> for Position {
    fn index_mut(&mut self, coordinate: &str) -> &mut Piece {
        let (file, rank) = to_indices(coordinate);
        &mut self.board[file as usize][rank as usize]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}
