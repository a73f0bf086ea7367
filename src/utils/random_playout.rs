//! Uniformly random legal playouts.
//!
//! Used for diagnostics and for fuzzing the generator and the FEN codec with
//! reachable positions. Pass a seeded `StdRng` for reproducible runs.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

/// Plays up to `max_plies` random legal moves from `start`. Returns every
/// visited position, `start` first; stops early when no legal move remains.
pub fn random_playout<R: Rng + ?Sized>(
    start: &Position,
    max_plies: usize,
    rng: &mut R,
) -> MoveGenResult<Vec<Position>> {
    let mut visited = Vec::with_capacity(max_plies + 1);
    visited.push(start.clone());

    for _ in 0..max_plies {
        let Some(current) = visited.last() else {
            break;
        };
        let legal_moves = LegalMoveGenerator.generate_moves(current)?;
        let Some(&picked) = legal_moves.choose(rng) else {
            break;
        };

        let next = apply_move(current, picked)?;
        visited.push(next);
    }

    Ok(visited)
}
