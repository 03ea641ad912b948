//! Conversions between two-character square coordinates (`e4`, `A1`) and
//! zero-based `(file, rank)` board indices.
//!
//! `is_valid_coordinate` is the gatekeeper: `to_indices` treats anything it
//! rejects as caller error and panics instead of mapping it to some square.

/// Exactly two characters, file `a`..=`h` (either case), rank `1`..=`8`.
#[inline]
pub fn is_valid_coordinate(coordinate: &str) -> bool {
    let bytes = coordinate.as_bytes();
    if bytes.len() != 2 {
        return false;
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    (b'a'..=b'h').contains(&file) && (b'1'..=b'8').contains(&rank)
}

/// Map a coordinate to `(file, rank)`; `a` and `1` map to `0`.
///
/// Panics if `is_valid_coordinate(coordinate)` does not hold.
#[inline]
pub fn to_indices(coordinate: &str) -> (u8, u8) {
    assert!(
        is_valid_coordinate(coordinate),
        "invalid board coordinate: {coordinate:?}"
    );

    let bytes = coordinate.as_bytes();
    (bytes[0].to_ascii_lowercase() - b'a', bytes[1] - b'1')
}

/// Inverse of `to_indices`, always lower case. Panics outside `0..=7`.
#[inline]
pub fn to_coordinate(file: u8, rank: u8) -> String {
    assert!(
        file < 8 && rank < 8,
        "board indices out of range: ({file}, {rank})"
    );

    let file_char = char::from(b'a' + file);
    let rank_char = char::from(b'1' + rank);
    format!("{file_char}{rank_char}")
}
