//! Plain-text board diagram.
//!
//! Rank 8 is printed first. Each rank line starts with its digit followed by
//! one space-separated two-character cell per file (`WR`, `BP`, or two spaces
//! when empty). A final line centres the file letters under their columns.

use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;

pub fn render_position(position: &Position) -> String {
    let mut out = String::with_capacity(9 * 26);

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));

        for file in 0..8u8 {
            let [color, kind] = position
                .piece_at(Square::from_indices(file, rank))
                .diagram_code();
            out.push(' ');
            out.push(color);
            out.push(kind);
        }

        out.push('\n');
    }

    out.push(' ');
    for file in 0..8u8 {
        out.push(' ');
        out.push(char::from(b'a' + file));
        out.push(' ');
    }
    out.push('\n');

    out
}
