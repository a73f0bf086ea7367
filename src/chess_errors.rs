//! Errors used throughout the crate.
//!
//! `ParseError` covers malformed FEN and coordinate text; `MoveError` covers
//! moves that cannot be applied to the position they were given. Out-of-range
//! board coordinates are programmer errors and panic instead.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// A FEN or coordinate string could not be interpreted. Each variant names
/// the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 6 space-separated FEN fields, found {0}")]
    FieldCount(usize),

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPiece(char),

    #[error("invalid empty-square count '{0}'")]
    InvalidEmptyCount(char),

    #[error("rank '{0}' does not describe exactly 8 files")]
    RankWidth(String),

    #[error("invalid side-to-move field: {0}")]
    InvalidSide(String),

    #[error("invalid castling field: {0}")]
    InvalidCastling(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid {field}: {token}")]
    InvalidCounter { field: &'static str, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),

    /// A castling move whose rook is not on its starting square.
    #[error("no castling rook on {0}")]
    MissingCastlingRook(Square),
}
