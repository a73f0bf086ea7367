//! Move application.
//!
//! `apply_move` clones and returns the successor; `Position::make_move`
//! mutates in place. Both update captures, castling rook relocation, en
//! passant, castling rights, clocks and the side to move.

use tracing::trace;

use crate::chess_errors::MoveError;
use crate::game_state::chess_rules::{castling_geometry, castling_right_for_rook_square};
use crate::game_state::chess_types::*;

pub fn apply_move(position: &Position, mv: Move) -> Result<Position, MoveError> {
    let mut next = position.clone();
    next.make_move(mv)?;
    Ok(next)
}

impl Position {
    /// Applies `mv` in place. On error the position is left unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<&mut Self, MoveError> {
        let moving = self.piece_at(mv.from).ok_or(MoveError::EmptyOrigin(mv.from))?;
        let color = moving.color;

        let castling_rook = match mv.castle {
            Some(side) if moving.kind == PieceKind::King => {
                let geometry = castling_geometry(color, side);
                if self.piece_at(geometry.rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
                    return Err(MoveError::MissingCastlingRook(geometry.rook_from));
                }
                Some((geometry.rook_from, geometry.rook_to))
            }
            _ => None,
        };

        let is_pawn = moving.kind == PieceKind::Pawn;
        let is_en_passant = is_pawn
            && mv.from.file() != mv.to.file()
            && self.piece_at(mv.to).is_none()
            && self.en_passant_target == Some(mv.to);
        let is_double_push = is_pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2;

        let captured = if is_en_passant {
            self.take_piece(Square::new(mv.from.rank(), mv.to.file()))
        } else {
            self.piece_at(mv.to)
        };

        self.take_piece(mv.from);
        let placed = mv.promotion.map_or(moving, |kind| Piece::new(kind, color));
        self.put_piece(mv.to, Some(placed));

        if let Some((rook_from, rook_to)) = castling_rook {
            let rook = self.take_piece(rook_from);
            self.put_piece(rook_to, rook);
        }

        self.update_castling_rights(color, moving.kind, mv);

        self.en_passant_target = if is_double_push {
            Some(Square::new((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };

        if is_pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = color.opposite();

        trace!(%mv, %color, halfmove_clock = self.halfmove_clock, "applied move");
        Ok(self)
    }

    fn update_castling_rights(&mut self, color: Color, moved: PieceKind, mv: Move) {
        if moved == PieceKind::King {
            self.castling_rights.revoke(color, None);
        }

        // A rook leaving its corner, or anything landing on a corner, ends
        // that corner's right.
        for square in [mv.from, mv.to] {
            if let Some((owner, side)) = castling_right_for_rook_square(square) {
                self.castling_rights.revoke(owner, Some(side));
            }
        }
    }
}
