use crate::game_state::chess_types::Square;
use crate::moves::rays::Direction;

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

/// In-bounds knight destinations from `square`, ignoring occupancy.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_rank, d_file)| square.offset(d_rank, d_file))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_targets_from_d4_has_eight_targets() {
        assert_eq!(knight_targets(Square::new(3, 3)).count(), 8);
    }

    #[test]
    fn knight_targets_from_corner_has_two_targets() {
        let mut targets: Vec<Square> = knight_targets(Square::new(0, 0)).collect();
        targets.sort();
        assert_eq!(targets, vec![Square::new(1, 2), Square::new(2, 1)]);
    }
}
