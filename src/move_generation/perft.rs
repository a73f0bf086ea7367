//! Perft node counting with per-leaf move classification.

use std::thread;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }

    fn record_leaf(&mut self, before: &Position, mv: Move, after: &Position) {
        self.nodes += 1;

        let en_passant = is_en_passant(before, mv);
        if en_passant || before.piece_at(mv.to).is_some() {
            self.captures += 1;
        }
        if en_passant {
            self.en_passant += 1;
        }
        if mv.is_castling() {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }
        if is_king_in_check(after, after.side_to_move()) {
            self.checks += 1;
        }
    }
}

fn is_en_passant(position: &Position, mv: Move) -> bool {
    position
        .piece_at(mv.from)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn)
        && mv.from.file() != mv.to.file()
        && position.piece_at(mv.to).is_none()
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(position)? {
        let next = apply_move(position, mv)?;
        if depth == 1 {
            total.record_leaf(position, mv, &next);
        } else {
            total.merge(perft(generator, &next, depth - 1)?);
        }
    }

    Ok(total)
}

#[inline]
pub fn perft_legal(position: &Position, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&LegalMoveGenerator, position, depth)
}

/// Same counts as [`perft`], with each root move searched on its own thread.
pub fn perft_multi_threaded<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth <= 1 {
        return perft(generator, position, depth);
    }

    let root_moves = generator.generate_moves(position)?;
    let results: Vec<MoveGenResult<PerftCounts>> = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                scope.spawn(move || {
                    let next = apply_move(position, mv)?;
                    perft(generator, &next, depth - 1)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let mut total = PerftCounts::default();
    for result in results {
        total.merge(result?);
    }

    Ok(total)
}
