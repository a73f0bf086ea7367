use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::slide_along;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    slide_along(position, color, from, &QUEEN_DIRECTIONS, out);
}
