use crate::game_state::chess_types::*;
use crate::moves::rays::{ray, Direction};

/// Pushes `from -> to` unless `to` holds a piece of `color`. An enemy piece
/// on `to` makes it a capture, not an exclusion.
#[inline]
pub fn push_unless_friendly(
    position: &Position,
    color: Color,
    from: Square,
    to: Square,
    out: &mut Vec<Move>,
) {
    match position.piece_at(to) {
        Some(piece) if piece.color == color => {}
        _ => out.push(Move::new(from, to)),
    }
}

/// Walks each direction outward from `from`: empty squares are quiet moves,
/// the first occupied square ends the ray and is a capture if it holds an
/// enemy piece.
pub fn slide_along(
    position: &Position,
    color: Color,
    from: Square,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        for to in ray(from, direction) {
            match position.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}
