use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unless_friendly;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        push_unless_friendly(position, color, from, to, out);
    }
}
