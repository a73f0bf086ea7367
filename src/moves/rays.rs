//! Ray walking shared by the sliding pieces.

use crate::game_state::chess_types::Square;

/// A `(rank, file)` step.
pub type Direction = (i8, i8);

/// Squares outward from `from` along `direction`, excluding `from`, up to the
/// board edge. Occupancy is the caller's concern.
#[inline]
pub fn ray(from: Square, direction: Direction) -> impl Iterator<Item = Square> {
    let (d_rank, d_file) = direction;
    std::iter::successors(from.offset(d_rank, d_file), move |sq| sq.offset(d_rank, d_file))
}
