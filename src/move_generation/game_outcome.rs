//! Terminal-state classification: the generator cannot tell checkmate from
//! stalemate, so combine "no legal moves" with "king attacked" here.

use log::debug;

use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

pub fn classify_position(position: &Position) -> GameOutcome {
    if !generate_legal_moves(position).is_empty() {
        return GameOutcome::InProgress;
    }

    let side = position.side_to_move;
    let outcome = if is_in_check(position, side) {
        GameOutcome::Checkmate {
            winner: side.opposite(),
        }
    } else {
        GameOutcome::Stalemate
    };
    debug!("{side:?} to move has no legal moves: {outcome:?}");
    outcome
}
