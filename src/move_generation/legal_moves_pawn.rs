//! Pawn move generation: pushes, double pushes from the start rank,
//! diagonal captures (including en passant) and promotions.
//!
//! A move reaching the last rank is emitted once per promotion kind.

use crate::game_state::chess_rules::{en_passant_capture_rank, pawn_start_rank, promotion_rank};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_forward};

pub(crate) fn generate_pawn_moves(
    position: &Position,
    from: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    // Pushes never attack anything.
    if mode == GenerationMode::Full {
        generate_pushes(position, from, color, out);
    }

    for to in pawn_capture_targets(color, from) {
        let captures_piece = position.piece_at(to).is_some_and(|piece| piece.color != color);
        let captures_en_passant = position.piece_at(to).is_none()
            && position.en_passant_target() == Some(to)
            && to.rank() == en_passant_capture_rank(color);

        if captures_piece || captures_en_passant {
            push_with_promotions(from, to, color, out);
        }
    }
}

fn generate_pushes(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let forward = pawn_forward(color);

    let Some(one_step) = from.offset(forward, 0) else {
        return;
    };
    if position.piece_at(one_step).is_some() {
        return;
    }
    push_with_promotions(from, one_step, color, out);

    if from.rank() != pawn_start_rank(color) {
        return;
    }
    if let Some(two_step) = one_step.offset(forward, 0) {
        if position.piece_at(two_step).is_none() {
            out.push(Move::new(from, two_step));
        }
    }
}

fn push_with_promotions(from: Square, to: Square, color: Color, out: &mut Vec<Move>) {
    if to.rank() == promotion_rank(color) {
        for kind in PieceKind::PROMOTIONS {
            out.push(Move::promoting(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::{generate_moves, GenerationMode};

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn targets(position: &Position, from: &str) -> Vec<Square> {
        let mut targets: Vec<Square> = generate_moves(position, sq(from)).iter().map(|mv| mv.to).collect();
        targets.sort();
        targets
    }

    #[test]
    fn start_rank_pawn_may_push_one_or_two() {
        let position = Position::new_game();
        assert_eq!(targets(&position, "e2"), vec![sq("e3"), sq("e4")]);
        assert_eq!(targets(&position, "d7"), vec![sq("d5"), sq("d6")]);
    }

    #[test]
    fn blocked_single_step_also_blocks_double_step() {
        let position = Position::from_fen("8/8/8/8/8/4n3/4P3/8 w - - 0 1").expect("FEN should parse");
        assert!(targets(&position, "e2").is_empty());

        let position = Position::from_fen("8/8/8/8/4n3/8/4P3/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(targets(&position, "e2"), vec![sq("e3")]);
    }

    #[test]
    fn captures_need_an_enemy_piece() {
        let position = Position::from_fen("8/8/8/8/8/3p1N2/4P3/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(targets(&position, "e2"), vec![sq("d3"), sq("e3"), sq("e4")]);
    }

    #[test]
    fn en_passant_target_is_capturable() {
        let position = Position::from_fen("8/8/8/3pP3/8/8/8/8 w - d6 0 1").expect("FEN should parse");
        assert_eq!(targets(&position, "e5"), vec![sq("d6"), sq("e6")]);
    }

    #[test]
    fn en_passant_target_on_wrong_rank_is_ignored() {
        let position = Position::from_fen("8/8/8/8/8/8/4P3/8 w - d3 0 1").expect("FEN should parse");
        assert_eq!(targets(&position, "e2"), vec![sq("e3"), sq("e4")]);
    }

    #[test]
    fn promotion_enumerates_all_four_kinds() {
        let position = Position::from_fen("3r4/4P3/8/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        let moves = generate_moves(&position, sq("e7"));

        assert_eq!(moves.len(), 8);
        for kind in PieceKind::PROMOTIONS {
            assert!(moves.contains(&Move::promoting(sq("e7"), sq("e8"), kind)));
            assert!(moves.contains(&Move::promoting(sq("e7"), sq("d8"), kind)));
        }
    }

    #[test]
    fn attack_probe_skips_pushes() {
        let position = Position::from_fen("8/8/8/8/8/3k4/4P3/8 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&position, sq("e2"), Color::White, GenerationMode::AttackProbe, &mut out);

        assert_eq!(out, vec![Move::new(sq("e2"), sq("d3"))]);
    }
}
