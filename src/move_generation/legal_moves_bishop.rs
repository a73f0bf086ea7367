use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::slide_along;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    slide_along(position, color, from, &BISHOP_DIRECTIONS, out);
}
