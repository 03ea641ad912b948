//! Board diagrams: eight rank strings, rank 8 first. Upper case is white,
//! lower case black, `.` an empty square. Castling flags start unspent.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

fn piece_from_cell(cell: u8) -> Option<Piece> {
    let piece = match cell {
        b'P' => Piece::WHITE_PAWN,
        b'N' => Piece::WHITE_KNIGHT,
        b'B' => Piece::WHITE_BISHOP,
        b'R' => Piece::WHITE_ROOK,
        b'Q' => Piece::WHITE_QUEEN,
        b'K' => Piece::WHITE_KING,
        b'p' => Piece::BLACK_PAWN,
        b'n' => Piece::BLACK_KNIGHT,
        b'b' => Piece::BLACK_BISHOP,
        b'r' => Piece::BLACK_ROOK,
        b'q' => Piece::BLACK_QUEEN,
        b'k' => Piece::BLACK_KING,
        b'.' => Piece::NONE,
        _ => return None,
    };
    Some(piece)
}

pub fn position_from_diagram(ranks: [&str; 8], side_to_move: Color) -> ChessResult<Position> {
    let mut position = Position::new_empty();
    position.side_to_move = side_to_move;

    for (row, text) in ranks.iter().enumerate() {
        if text.len() != 8 {
            return Err(ChessError::InvalidDiagram(format!(
                "rank {text:?} must have eight cells"
            )));
        }
        let rank = 7 - row as u8;
        for (file, cell) in text.bytes().enumerate() {
            let piece = piece_from_cell(cell).ok_or_else(|| {
                ChessError::InvalidDiagram(format!("unexpected cell {:?}", cell as char))
            })?;
            position.set_piece(Square::from_indices(file as u8, rank), piece);
        }
    }

    Ok(position)
}

/// The "Kiwipete" perft position, white to move, all castling rights.
pub fn kiwipete() -> ChessResult<Position> {
    position_from_diagram(
        [
            "r...k..r", //
            "p.ppqpb.", //
            "bn..pnp.", //
            "...PN...", //
            ".p..P...", //
            "..N..Q.p", //
            "PPPBBPPP", //
            "R...K..R",
        ],
        Color::White,
    )
}

/// Rook-and-pawn endgame perft position with en passant pins.
pub fn rook_pawn_endgame() -> ChessResult<Position> {
    position_from_diagram(
        [
            "........", //
            "..p.....", //
            "...p....", //
            "KP.....r", //
            ".R...p.k", //
            "........", //
            "....P.P.", //
            "........",
        ],
        Color::White,
    )
}
