//! Diagonal ray directions.

use crate::moves::rays::Direction;

pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
