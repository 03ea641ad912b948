use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::{CastlingFlags, Position};
use crate::move_generation::legal_move_apply::{apply_move, retract_move};
use crate::moves::chess_move::Move;

/// Everything `retract_move` needs that a `Move` alone does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub moved_piece: Piece,
    pub captured_piece: Piece,
    pub captured_square: Square,
    pub prev_castling: CastlingFlags,
    pub prev_en_passant_target: Option<Square>,
    pub prev_side_to_move: Color,
}

/// Caller-owned make/unmake log pairing each applied move with its token.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    entries: Vec<(Move, UndoState)>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `mv` to `position` and remember how to take it back.
    pub fn push_move(&mut self, position: &mut Position, mv: Move) -> ChessResult<()> {
        let undo = apply_move(position, &mv)?;
        self.entries.push((mv, undo));
        Ok(())
    }

    /// Retract the most recent move, returning it. `None` when empty.
    pub fn pop_move(&mut self, position: &mut Position) -> Option<Move> {
        let (mv, undo) = self.entries.pop()?;
        retract_move(position, &mv, undo);
        Some(mv)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applied moves, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.entries.iter().map(|(mv, _)| mv)
    }
}
