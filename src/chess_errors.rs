//! Errors used throughout the position engine.
//!
//! `ChessError` is the single recoverable error type of the crate. Contract
//! violations (indexing the board with a malformed coordinate string) are not
//! represented here; those panic at the call site.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Text that is not a two-character `a1`..`h8` coordinate.
    InvalidCoordinate(String),

    /// A board diagram with the wrong shape or an unknown cell letter.
    InvalidDiagram(String),

    /// A grid cell holds a value that is not a well-formed piece.
    InvalidPiece { square: Square, raw: u8 },

    /// A move without start or end square was handed to the applier.
    NullMove,

    /// The start square of a move holds no piece.
    EmptyStartSquare(Square),

    /// A perft worker thread panicked before reporting its counts.
    WorkerPanicked,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidCoordinate(text) => write!(f, "invalid coordinate: {text:?}"),
            ChessError::InvalidDiagram(reason) => write!(f, "invalid board diagram: {reason}"),
            ChessError::InvalidPiece { square, raw } => {
                write!(f, "invalid piece value {raw:#04x} on {square}")
            }
            ChessError::NullMove => write!(f, "cannot apply the null move"),
            ChessError::EmptyStartSquare(square) => {
                write!(f, "no piece on start square {square}")
            }
            ChessError::WorkerPanicked => write!(f, "perft worker thread panicked"),
        }
    }
}

impl Error for ChessError {}
