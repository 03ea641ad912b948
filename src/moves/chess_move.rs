//! Move record: a candidate or executed transition between two positions.

use std::fmt;

use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;

/// A move as produced by the generator and consumed by the applier.
///
/// `Move::default()` is the null move: no squares, no flags, no capture and
/// no promotion. For an en passant capture `captured_piece` is the enemy pawn,
/// which stands beside the destination rather than on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Option<Square>,
    pub end: Option<Square>,
    pub short_castle: bool,
    pub long_castle: bool,
    pub en_passant: bool,
    pub captured_piece: Piece,
    pub promotion: Piece,
}

impl Move {
    /// Plain move or capture between two squares.
    #[inline]
    pub fn new(start: Square, end: Square, captured_piece: Piece) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            captured_piece,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured_piece.is_none()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.short_castle || self.long_castle
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        !self.promotion.is_none()
    }
}

/// Long algebraic text: `e2e4`, `e7e8q`, `0000` for the null move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return f.write_str("0000");
        };
        write!(f, "{start}{end}")?;
        if let Some(piece_type) = self.promotion.piece_type() {
            write!(f, "{}", piece_type.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_types::Square;
    use crate::game_state::piece::Piece;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn default_is_the_null_move() {
        let mv = Move::default();
        assert!(mv.is_null());
        assert!(!mv.is_capture() && !mv.is_castle() && !mv.is_promotion());
        assert!(!mv.en_passant);
        assert_eq!(mv.captured_piece, Piece::NONE);
        assert_eq!(mv.to_string(), "0000");
    }

    #[test]
    fn equality_is_field_by_field() {
        let quiet = Move::new(sq("g1"), sq("f3"), Piece::NONE);
        assert_eq!(quiet, Move::new(sq("g1"), sq("f3"), Piece::NONE));

        let capture = Move::new(sq("g1"), sq("f3"), Piece::BLACK_PAWN);
        assert_ne!(quiet, capture);
        assert!(capture.is_capture());
    }

    #[test]
    fn long_algebraic_display() {
        let push = Move::new(sq("e2"), sq("e4"), Piece::NONE);
        assert_eq!(push.to_string(), "e2e4");

        let promotion = Move {
            promotion: Piece::BLACK_KNIGHT,
            ..Move::new(sq("b2"), sq("a1"), Piece::WHITE_ROOK)
        };
        assert_eq!(promotion.to_string(), "b2a1n");
    }
}
