//! Test-only wrappers that unwrap the fixed diagrams.

use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::utils::diagram;

pub fn position_from_diagram(ranks: [&str; 8], side_to_move: Color) -> Position {
    diagram::position_from_diagram(ranks, side_to_move).expect("test diagram should be well formed")
}

pub fn kiwipete() -> Position {
    diagram::kiwipete().expect("kiwipete diagram is well formed")
}

pub fn rook_pawn_endgame() -> Position {
    diagram::rook_pawn_endgame().expect("endgame diagram is well formed")
}
