//! Crate root module declarations for the chess position engine.
//!
//! The crate represents a chess position, generates the legal moves from it,
//! and applies or retracts moves while keeping castling rights, the en
//! passant target and the side to move consistent.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
    pub mod chess_move;
}

pub mod move_generation {
    pub mod game_outcome;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod diagram;
    pub mod render_position;
}

#[cfg(test)]
mod test_support;
