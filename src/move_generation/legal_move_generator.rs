//! Full legal move generation and terminal-state detection.
//!
//! Layered on top of the candidate generator: each candidate is applied and
//! dropped if it leaves the mover's own king in check.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{
    MoveGenResult, MoveGenerator, PseudoLegalMoveGenerator,
};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, position: &Position) -> MoveGenResult<Vec<Move>> {
        let mover = position.side_to_move();
        let candidates = PseudoLegalMoveGenerator.generate_moves(position)?;

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            let next = apply_move(position, mv)?;
            if !is_king_in_check(&next, mover) {
                legal.push(mv);
            }
        }

        Ok(legal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

pub fn game_status(position: &Position) -> MoveGenResult<GameStatus> {
    if !LegalMoveGenerator.generate_moves(position)?.is_empty() {
        return Ok(GameStatus::Ongoing);
    }

    if is_king_in_check(position, position.side_to_move()) {
        Ok(GameStatus::Checkmate)
    } else {
        Ok(GameStatus::Stalemate)
    }
}

impl Position {
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(game_status(self), Ok(GameStatus::Checkmate))
    }

    pub fn is_stalemate(&self) -> bool {
        matches!(game_status(self), Ok(GameStatus::Stalemate))
    }
}
