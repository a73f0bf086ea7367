//! King move generation, including castling legality.
//!
//! Castling is offered for a side only when the right is held, the squares
//! between king and rook are empty, the king is not in check, and a king
//! walked one and then two squares toward the rook is not in check after
//! either step. The walk reuses move application and the check oracle, so
//! transit and destination are tested with the king actually standing there.

use tracing::trace;

use crate::game_state::chess_rules::{castling_geometry, CastlingGeometry};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::push_unless_friendly;
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::king_moves::king_targets;

pub(crate) fn generate_king_moves(
    position: &Position,
    from: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    for to in king_targets(from) {
        push_unless_friendly(position, color, from, to, out);
    }

    if mode == GenerationMode::Full {
        generate_castling_moves(position, from, color, out);
    }
}

fn generate_castling_moves(position: &Position, king_from: Square, color: Color, out: &mut Vec<Move>) {
    let rights = position.castling_rights_for(color);
    if !rights.any() {
        return;
    }

    // Cannot castle out of check.
    if is_king_in_check(position, color) {
        return;
    }

    for side in CastleSide::BOTH {
        if !rights.has(side) {
            continue;
        }

        let geometry = castling_geometry(color, side);
        if king_from != geometry.king_from
            || position.piece_at(geometry.rook_from) != Some(Piece::new(PieceKind::Rook, color))
        {
            continue;
        }
        if geometry.between_squares().any(|sq| position.piece_at(sq).is_some()) {
            continue;
        }

        if king_walk_is_safe(position, color, &geometry) {
            out.push(Move::castling(geometry.king_from, geometry.king_to, side));
        } else {
            trace!(%color, ?side, "castling path is attacked");
        }
    }
}

fn king_walk_is_safe(position: &Position, color: Color, geometry: &CastlingGeometry) -> bool {
    let Ok(in_transit) = apply_move(position, Move::new(geometry.king_from, geometry.king_transit))
    else {
        return false;
    };
    if is_king_in_check(&in_transit, color) {
        return false;
    }

    let Ok(arrived) = apply_move(&in_transit, Move::new(geometry.king_transit, geometry.king_to))
    else {
        return false;
    };
    !is_king_in_check(&arrived, color)
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::generate_moves;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn castles(fen: &str, king: &str) -> Vec<Move> {
        let position = Position::from_fen(fen).expect("test FEN should parse");
        generate_moves(&position, sq(king))
            .into_iter()
            .filter(Move::is_castling)
            .collect()
    }

    #[test]
    fn lone_king_on_e4_has_eight_moves() {
        let position = Position::from_fen("8/8/8/8/4K3/8/8/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(generate_moves(&position, sq("e4")).len(), 8);
    }

    #[test]
    fn both_sides_offered_on_open_back_rank() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1");
        assert_eq!(
            moves,
            vec![
                Move::castling(sq("e1"), sq("g1"), CastleSide::KingSide),
                Move::castling(sq("e1"), sq("c1"), CastleSide::QueenSide),
            ]
        );

        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8");
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn no_castling_without_rights() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1", "e1").is_empty());
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w K - 0 1", "e1"),
            vec![Move::castling(sq("e1"), sq("g1"), CastleSide::KingSide)]
        );
    }

    #[test]
    fn no_castling_while_in_check() {
        assert!(castles("4r3/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1").is_empty());
    }

    #[test]
    fn attacked_king_side_transit_only_blocks_king_side() {
        let moves = castles("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1");
        assert_eq!(
            moves,
            vec![Move::castling(sq("e1"), sq("c1"), CastleSide::QueenSide)]
        );
    }

    #[test]
    fn attacked_king_side_destination_only_blocks_king_side() {
        let moves = castles("6r1/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1");
        assert_eq!(
            moves,
            vec![Move::castling(sq("e1"), sq("c1"), CastleSide::QueenSide)]
        );
    }

    #[test]
    fn attacked_queen_side_path_only_blocks_queen_side() {
        let moves = castles("3r4/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1");
        assert_eq!(
            moves,
            vec![Move::castling(sq("e1"), sq("g1"), CastleSide::KingSide)]
        );

        let moves = castles("2r5/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1");
        assert_eq!(
            moves,
            vec![Move::castling(sq("e1"), sq("g1"), CastleSide::KingSide)]
        );
    }

    #[test]
    fn attacked_b_file_does_not_block_queen_side() {
        let moves = castles("1r6/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1");
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn occupied_b_file_blocks_queen_side() {
        let moves = castles("8/8/8/8/8/8/8/RN2K2R w KQ - 0 1", "e1");
        assert_eq!(
            moves,
            vec![Move::castling(sq("e1"), sq("g1"), CastleSide::KingSide)]
        );
    }

    #[test]
    fn pawn_attack_on_transit_blocks_castling() {
        let moves = castles("8/8/8/8/8/8/4p3/R3K2R w KQ - 0 1", "e1");
        assert!(moves.is_empty());
    }

    #[test]
    fn missing_rook_means_no_castling_despite_rights() {
        let moves = castles("8/8/8/8/8/8/8/4K2R w KQ - 0 1", "e1");
        assert_eq!(
            moves,
            vec![Move::castling(sq("e1"), sq("g1"), CastleSide::KingSide)]
        );
    }
}
