//! Bit-packed piece values.
//!
//! A piece is one byte: the low three bits carry the type code
//! (`PieceType` discriminant, `0` for no piece) and two separate bits carry
//! the color. The packing stays private to this module; everything else goes
//! through the named constants, `Piece::new` and the predicates.

use crate::game_state::chess_types::{Color, PieceType};

const TYPE_MASK: u8 = 0b0000_0111;
const TYPE_MAX: u8 = PieceType::King as u8;
const BLACK_FLAG: u8 = 1 << 3;
const WHITE_FLAG: u8 = 1 << 4;
const COLOR_MASK: u8 = BLACK_FLAG | WHITE_FLAG;

/// Content of one board square. `Piece::NONE` is the empty square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const NONE: Piece = Piece(0);

    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceType::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceType::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceType::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceType::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceType::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceType::King);

    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceType::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceType::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceType::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceType::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceType::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceType::King);

    /// Encode a colored piece.
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        let color_flag = match color {
            Color::White => WHITE_FLAG,
            Color::Black => BLACK_FLAG,
        };
        Piece(color_flag | piece_type.code())
    }

    /// Wrap an arbitrary byte. The result may be malformed; see `is_valid`.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Piece(raw)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// `NONE` is valid. Anything else needs exactly one color bit, a type
    /// code in `1..=6`, and no bits outside the color and type fields.
    pub const fn is_valid(self) -> bool {
        if self.0 == Piece::NONE.0 {
            return true;
        }
        if self.is_white() == self.is_black() {
            return false;
        }
        let type_code = self.0 & TYPE_MASK;
        if type_code == 0 || type_code > TYPE_MAX {
            return false;
        }
        self.0 & (COLOR_MASK | TYPE_MASK) == self.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Piece::NONE.0
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        self.0 & WHITE_FLAG != 0
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        self.0 & BLACK_FLAG != 0
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        self.0 & TYPE_MASK == PieceType::Pawn as u8
    }

    #[inline]
    pub const fn is_knight(self) -> bool {
        self.0 & TYPE_MASK == PieceType::Knight as u8
    }

    #[inline]
    pub const fn is_bishop(self) -> bool {
        self.0 & TYPE_MASK == PieceType::Bishop as u8
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        self.0 & TYPE_MASK == PieceType::Rook as u8
    }

    #[inline]
    pub const fn is_queen(self) -> bool {
        self.0 & TYPE_MASK == PieceType::Queen as u8
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.0 & TYPE_MASK == PieceType::King as u8
    }

    /// Color of a well-formed piece; `None` for the empty square or when
    /// both/neither color bits are set.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match (self.is_white(), self.is_black()) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn piece_type(self) -> Option<PieceType> {
        PieceType::from_code(self.0 & TYPE_MASK)
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    #[inline]
    pub fn is(self, color: Color, piece_type: PieceType) -> bool {
        self == Piece::new(color, piece_type)
    }

    /// Two-character diagram cell: color letter then type letter, or two
    /// spaces for an empty square.
    pub fn diagram_code(self) -> [char; 2] {
        let Some(piece_type) = self.piece_type() else {
            return [' ', ' '];
        };
        let color = if self.is_black() { 'B' } else { 'W' };
        [color, piece_type.letter()]
    }
}
