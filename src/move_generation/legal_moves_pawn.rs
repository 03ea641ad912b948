//! Pawn pushes, double steps, diagonal captures, en passant and promotion.

use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::chess_types::{Color, PieceType, Square, PROMOTION_TYPES};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::attack_tables::pawn_attacks;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(0, forward) {
        if position.piece_at(one_step).is_none() {
            push_pawn_move(out, color, Move::new(from, one_step, Piece::NONE));

            if from.rank() == pawn_start_rank(color) {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if position.piece_at(two_step).is_none() {
                        out.push(Move::new(from, two_step, Piece::NONE));
                    }
                }
            }
        }
    }

    for to in Square::iter_bits(pawn_attacks(color, from)) {
        let target = position.piece_at(to);
        if target.is_color(color.opposite()) {
            push_pawn_move(out, color, Move::new(from, to, target));
        } else if target.is_none() && position.en_passant_target == Some(to) {
            if let Some(mv) = en_passant_capture(position, from, to, color) {
                out.push(mv);
            }
        }
    }
}

/// The victim stands on the destination file, on the capturing pawn's rank.
fn en_passant_capture(position: &Position, from: Square, to: Square, color: Color) -> Option<Move> {
    let victim_square = Square::from_indices(to.file(), from.rank());
    let victim = position.piece_at(victim_square);
    if victim != Piece::new(color.opposite(), PieceType::Pawn) {
        return None;
    }

    Some(Move {
        en_passant: true,
        ..Move::new(from, to, victim)
    })
}

/// Push `mv`, expanding it into one move per promotion piece when it lands
/// on the last rank.
fn push_pawn_move(out: &mut Vec<Move>, color: Color, mv: Move) {
    let reaches_last_rank = mv.end.map(Square::rank) == Some(promotion_rank(color));
    if !reaches_last_rank {
        out.push(mv);
        return;
    }

    for piece_type in PROMOTION_TYPES {
        out.push(Move {
            promotion: Piece::new(color, piece_type),
            ..mv
        });
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::piece::Piece;
    use crate::game_state::position::Position;
    use crate::moves::chess_move::Move;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn pawn_moves(position: &Position, from: &str, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        generate_pawn_moves(position, sq(from), color, &mut moves);
        moves
    }

    fn names(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn home_rank_pawn_pushes_one_or_two() {
        let position = Position::new_game();
        assert_eq!(names(&pawn_moves(&position, "e2", Color::White)), vec!["e2e3", "e2e4"]);
        assert_eq!(names(&pawn_moves(&position, "d7", Color::Black)), vec!["d7d6", "d7d5"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut position = Position::new_game();
        position.set("e3", Piece::BLACK_KNIGHT);
        assert!(pawn_moves(&position, "e2", Color::White).is_empty());

        position.set("e3", Piece::NONE);
        position.set("e4", Piece::BLACK_KNIGHT);
        assert_eq!(names(&pawn_moves(&position, "e2", Color::White)), vec!["e2e3"]);
    }

    #[test]
    fn captures_only_enemy_pieces() {
        let mut position = Position::new_empty();
        position.set("d4", Piece::WHITE_PAWN);
        position.set("c5", Piece::BLACK_ROOK);
        position.set("e5", Piece::WHITE_KNIGHT);
        position.set("d5", Piece::BLACK_PAWN);

        let moves = pawn_moves(&position, "d4", Color::White);
        assert_eq!(names(&moves), vec!["d4c5"]);
        assert_eq!(moves[0].captured_piece, Piece::BLACK_ROOK);
    }

    #[test]
    fn en_passant_needs_the_target_square() {
        let mut position = Position::new_empty();
        position.set("e5", Piece::WHITE_PAWN);
        position.set("d5", Piece::BLACK_PAWN);
        position.en_passant_target = Some(sq("d6"));

        let moves = pawn_moves(&position, "e5", Color::White);
        assert_eq!(names(&moves), vec!["e5e6", "e5d6"]);
        let ep = moves[1];
        assert!(ep.en_passant);
        assert_eq!(ep.captured_piece, Piece::BLACK_PAWN);

        position.en_passant_target = None;
        assert_eq!(names(&pawn_moves(&position, "e5", Color::White)), vec!["e5e6"]);
    }

    #[test]
    fn promotions_expand_to_four_pieces() {
        let mut position = Position::new_empty();
        position.set("b2", Piece::BLACK_PAWN);
        position.set("a1", Piece::WHITE_ROOK);

        let moves = pawn_moves(&position, "b2", Color::Black);
        assert_eq!(
            names(&moves),
            vec!["b2b1n", "b2b1b", "b2b1r", "b2b1q", "b2a1n", "b2a1b", "b2a1r", "b2a1q"]
        );
        assert!(moves.iter().all(|m| m.promotion.is_black()));
        assert!(moves[4..].iter().all(|m| m.captured_piece == Piece::WHITE_ROOK));
    }
}
