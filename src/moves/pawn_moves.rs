//! Pawn direction and capture geometry.

use crate::game_state::chess_types::{Color, Square};

/// Rank step of a pawn push for `color`.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// The (at most two) diagonal squares a pawn of `color` on `square` attacks.
#[inline]
pub fn pawn_capture_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = pawn_forward(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| square.offset(forward, d_file))
}
