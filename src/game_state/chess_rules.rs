//! Canonical chess-rule constants.
//!
//! Starting position, the ranks pawns start and promote on, and the fixed
//! king/rook geometry of both castling sides.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Rank index holding the king and rooks at the start.
#[inline]
pub const fn home_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rank an en-passant target must sit on for `color` to capture onto it.
#[inline]
pub const fn en_passant_capture_rank(color: Color) -> u8 {
    match color {
        Color::White => 5,
        Color::Black => 2,
    }
}

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingGeometry {
    pub king_from: Square,
    /// Square the king crosses; also where the rook lands.
    pub king_transit: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Files strictly between king and rook.
    pub between: &'static [u8],
}

pub const fn castling_geometry(color: Color, side: CastleSide) -> CastlingGeometry {
    let rank = home_rank(color);
    match side {
        CastleSide::KingSide => CastlingGeometry {
            king_from: Square::new(rank, 4),
            king_transit: Square::new(rank, 5),
            king_to: Square::new(rank, 6),
            rook_from: Square::new(rank, 7),
            rook_to: Square::new(rank, 5),
            between: &[5, 6],
        },
        CastleSide::QueenSide => CastlingGeometry {
            king_from: Square::new(rank, 4),
            king_transit: Square::new(rank, 3),
            king_to: Square::new(rank, 2),
            rook_from: Square::new(rank, 0),
            rook_to: Square::new(rank, 3),
            between: &[1, 2, 3],
        },
    }
}

impl CastlingGeometry {
    pub fn between_squares(&self) -> impl Iterator<Item = Square> + '_ {
        let rank = self.king_from.rank();
        self.between.iter().map(move |&file| Square::new(rank, file))
    }
}

/// The castling right a rook standing on `square` at the start guards, if any.
pub fn castling_right_for_rook_square(square: Square) -> Option<(Color, CastleSide)> {
    for color in [Color::White, Color::Black] {
        for side in CastleSide::BOTH {
            if castling_geometry(color, side).rook_from == square {
                return Some((color, side));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_side_between_covers_rook_path() {
        let geometry = castling_geometry(Color::Black, CastleSide::QueenSide);
        let files: Vec<u8> = geometry.between_squares().map(|sq| sq.file()).collect();
        assert_eq!(files, vec![1, 2, 3]);
        assert_eq!(geometry.king_to, Square::new(7, 2));
        assert_eq!(geometry.rook_to, geometry.king_transit);
    }

    #[test]
    fn corner_squares_map_to_rights() {
        assert_eq!(
            castling_right_for_rook_square(Square::new(0, 7)),
            Some((Color::White, CastleSide::KingSide))
        );
        assert_eq!(
            castling_right_for_rook_square(Square::new(7, 0)),
            Some((Color::Black, CastleSide::QueenSide))
        );
        assert_eq!(castling_right_for_rook_square(Square::new(0, 4)), None);
    }
}
