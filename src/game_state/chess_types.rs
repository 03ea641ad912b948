//! Small value types shared by every layer: side color, piece type and
//! board square.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;
use crate::utils::algebraic::{is_valid_coordinate, to_coordinate, to_indices};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn push for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank index of this side's back rank.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Piece type. Discriminants are the packed type codes used by `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceType::Pawn),
            2 => Some(PieceType::Knight),
            3 => Some(PieceType::Bishop),
            4 => Some(PieceType::Rook),
            5 => Some(PieceType::Queen),
            6 => Some(PieceType::King),
            _ => None,
        }
    }

    /// Letter used in diagrams and long algebraic promotion suffixes.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

/// Pieces a pawn may promote to, in generation order.
pub const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
];

/// Board square. The index is `rank * 8 + file`, so `a1 == 0` and `h8 == 63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Panics if either index is outside `0..=7`.
    #[inline]
    pub fn from_indices(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square indices out of range: ({file}, {rank})");
        Square(rank * 8 + file)
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// One-hot bitboard of this square.
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// The square `d_file` files and `d_rank` ranks away, if still on the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file() as i8 + d_file;
        let rank = self.rank() as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Iterate over the squares set in `bitboard`, lowest index first.
    pub fn iter_bits(mut bitboard: u64) -> impl Iterator<Item = Square> {
        std::iter::from_fn(move || {
            if bitboard == 0 {
                return None;
            }
            let sq = bitboard.trailing_zeros() as u8;
            bitboard &= bitboard - 1;
            Some(Square(sq))
        })
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_coordinate(s) {
            return Err(ChessError::InvalidCoordinate(s.to_owned()));
        }
        let (file, rank) = to_indices(s);
        Ok(Square::from_indices(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_coordinate(self.file(), self.rank()))
    }
}
