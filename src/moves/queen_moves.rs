use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rays::Direction;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub const QUEEN_DIRECTIONS: [Direction; 8] = generate_queen_directions();

const fn generate_queen_directions() -> [Direction; 8] {
    let mut table = [(0i8, 0i8); 8];
    let mut i = 0usize;

    while i < 4 {
        table[i] = ROOK_DIRECTIONS[i];
        table[i + 4] = BISHOP_DIRECTIONS[i];
        i += 1;
    }

    table
}
