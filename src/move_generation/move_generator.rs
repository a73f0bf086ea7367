//! Per-square move dispatch and the side-wide generator seam.
//!
//! `generate_moves` is total: an empty square yields no moves. Dispatch is a
//! closed match over the six piece kinds.

use crate::chess_errors::MoveError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub type MoveGenResult<T> = Result<T, MoveError>;

/// What a generation pass is for.
///
/// `AttackProbe` is used while answering "is this king attacked": pawns emit
/// only their diagonal captures and kings never emit castling moves. Castling
/// legality itself asks the attack question, so a full pass from inside a
/// probe would recurse without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenerationMode {
    Full,
    AttackProbe,
}

/// Candidate moves for the piece on `square`: pseudo-legal moves plus castling
/// moves that pass the path-safety walk. Moves that leave the mover's own
/// king in check are not filtered out.
pub fn generate_moves(position: &Position, square: Square) -> Vec<Move> {
    let mut out = Vec::new();
    generate_moves_into(position, square, GenerationMode::Full, &mut out);
    out
}

pub(crate) fn generate_moves_into(
    position: &Position,
    square: Square,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let Some(piece) = position.piece_at(square) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, square, piece.color, mode, out),
        PieceKind::Knight => generate_knight_moves(position, square, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(position, square, piece.color, out),
        PieceKind::Rook => generate_rook_moves(position, square, piece.color, out),
        PieceKind::Queen => generate_queen_moves(position, square, piece.color, out),
        PieceKind::King => generate_king_moves(position, square, piece.color, mode, out),
    }
}

/// Generates every move available to the side to move.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &Position) -> MoveGenResult<Vec<Move>>;
}

/// All candidate moves of the side to move, without self-check filtering.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, position: &Position) -> MoveGenResult<Vec<Move>> {
        let mut out = Vec::with_capacity(64);
        for square in position.squares_of(position.side_to_move()) {
            generate_moves_into(position, square, GenerationMode::Full, &mut out);
        }
        Ok(out)
    }
}
