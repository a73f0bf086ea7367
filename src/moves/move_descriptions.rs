//! The `Move` value produced by generators and consumed by move application.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};

/// A candidate move. Castling moves carry the king's origin and destination
/// plus the side tag; the rook's relocation is implied by the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub castle: Option<CastleSide>,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castle: None,
            promotion: None,
        }
    }

    #[inline]
    pub const fn castling(from: Square, to: Square, side: CastleSide) -> Self {
        Self {
            from,
            to,
            castle: Some(side),
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            castle: None,
            promotion: Some(kind),
        }
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.castle.is_some()
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
