//! Rook move generation along the four orthogonal rays.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::slide_along;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    slide_along(position, color, from, &ROOK_DIRECTIONS, out);
}
