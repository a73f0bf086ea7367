//! Conversions between algebraic coordinates (e.g. `e4`) and [`Square`].

use crate::chess_errors::ParseError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ParseError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ParseError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ParseError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(rank - b'1', file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());

    format!("{file_char}{rank_char}")
}
