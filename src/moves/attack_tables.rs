//! Precomputed leaper attack maps and occupancy-aware slider rays.
//!
//! Bitboards use the `Square` index layout (`a1 == bit 0`, `h8 == bit 63`).
//! Move generation and check detection both read these tables, so a square
//! attacked by a piece is exactly a square that piece could capture on.

use crate::game_state::chess_types::{Color, Square};

pub const KNIGHT_ATTACKS: [u64; 64] = generate_leaper_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = generate_leaper_table(&KING_OFFSETS);
pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_leaper_table(&[(-1, 1), (1, 1)]);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_leaper_table(&[(-1, -1), (1, -1)]);

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index() as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index() as usize]
}

/// Squares a pawn of `color` standing on `square` captures on.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index() as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square.index() as usize],
    }
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

/// Walk from `square` in one direction up to and including the first
/// occupied square.
fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut current = square;

    while let Some(next) = current.offset(file_step, rank_step) {
        attacks |= next.bit();
        if occupancy & next.bit() != 0 {
            break;
        }
        current = next;
    }

    attacks
}

const fn generate_leaper_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let (df, dr) = offsets[i];
            attacks |= set_if_valid(file + df, rank + dr);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    1u64 << ((rank as usize) * 8 + (file as usize))
}
