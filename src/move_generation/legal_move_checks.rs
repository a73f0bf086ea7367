//! King-safety oracle.
//!
//! A king is attacked when some opposing piece has a pseudo-legal move onto
//! its square. Opposing moves are generated in attack-probe mode, so pawn
//! pushes do not count and no castling moves are considered.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{generate_moves_into, GenerationMode};

#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    let king = Piece::new(PieceKind::King, color);
    Square::all().find(|&sq| position.piece_at(sq) == Some(king))
}

/// A position without a king of `color` is never in check.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = king_square(position, color) else {
        return false;
    };

    let mut scratch = Vec::with_capacity(32);
    position.squares_of(color.opposite()).any(|from| {
        scratch.clear();
        generate_moves_into(position, from, GenerationMode::AttackProbe, &mut scratch);
        scratch.iter().any(|mv| mv.to == king_sq)
    })
}

/// Opposing pieces currently giving check to the king of `color`.
pub fn checkers(position: &Position, color: Color) -> Vec<Square> {
    let Some(king_sq) = king_square(position, color) else {
        return Vec::new();
    };

    let mut scratch = Vec::with_capacity(32);
    position
        .squares_of(color.opposite())
        .filter(|&from| {
            scratch.clear();
            generate_moves_into(position, from, GenerationMode::AttackProbe, &mut scratch);
            scratch.iter().any(|mv| mv.to == king_sq)
        })
        .collect()
}
