//! Value types shared by every subsystem: colors, piece kinds, squares and
//! castling rights.
//!
//! All types here are small `Copy` values. Board coordinates follow the
//! `[rank][file]` convention where rank 0 is rank 1 and file 0 is file a.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ParseError;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub use crate::game_state::game_state::{Position, PositionRecord};
pub use crate::moves::move_descriptions::Move;

/// Side to move, or owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to, strongest last.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Lowercase FEN letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Parses a FEN piece letter; uppercase is white, lowercase is black.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        PieceKind::from_letter(ch).map(|kind| Self::new(kind, color))
    }

    pub fn to_fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

/// A board coordinate. Always within the 8x8 board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "SquareRecord")]
pub struct Square {
    rank: u8,
    file: u8,
}

/// Unchecked wire form of [`Square`].
#[derive(Deserialize)]
struct SquareRecord {
    rank: u8,
    file: u8,
}

impl TryFrom<SquareRecord> for Square {
    type Error = ParseError;

    fn try_from(record: SquareRecord) -> Result<Self, Self::Error> {
        if record.rank < 8 && record.file < 8 {
            Ok(Self::new(record.rank, record.file))
        } else {
            Err(ParseError::InvalidSquare(format!(
                "rank {} file {}",
                record.rank, record.file
            )))
        }
    }
}

impl Square {
    /// Panics when either coordinate is outside `0..8`.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "square coordinates out of range");
        Self { rank, file }
    }

    #[inline]
    pub fn try_new(rank: i8, file: i8) -> Option<Self> {
        if is_within_bounds(rank, file) {
            Some(Self::new(rank as u8, file as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// The square `d_rank` ranks and `d_file` files away, if still on the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::try_new(self.rank as i8 + d_rank, self.file as i8 + d_file)
    }

    /// Every square, rank 1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::new(rank, file)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// True when both coordinates lie in `0..=7`.
#[inline]
pub const fn is_within_bounds(rank: i8, file: i8) -> bool {
    rank >= 0 && rank < 8 && file >= 0 && file < 8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

/// Castling availability for one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideCastlingRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl SideCastlingRights {
    pub const ALL: Self = Self {
        king_side: true,
        queen_side: true,
    };

    #[inline]
    pub const fn has(self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.king_side,
            CastleSide::QueenSide => self.queen_side,
        }
    }

    #[inline]
    pub fn any(self) -> bool {
        self.king_side || self.queen_side
    }
}

/// Castling availability for both colors.
///
/// Carried as explicit state; nothing here is re-derived from piece placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white: SideCastlingRights::ALL,
        black: SideCastlingRights::ALL,
    };

    pub const NONE: Self = Self {
        white: SideCastlingRights {
            king_side: false,
            queen_side: false,
        },
        black: SideCastlingRights {
            king_side: false,
            queen_side: false,
        },
    };

    #[inline]
    pub const fn for_color(self, color: Color) -> SideCastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.for_color(color).has(side)
    }

    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.set(color, side, true);
    }

    /// Clears one right, or both when `side` is `None`.
    pub fn revoke(&mut self, color: Color, side: Option<CastleSide>) {
        match side {
            Some(side) => self.set(color, side, false),
            None => {
                for side in CastleSide::BOTH {
                    self.set(color, side, false);
                }
            }
        }
    }

    fn set(&mut self, color: Color, side: CastleSide, value: bool) {
        let rights = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        match side {
            CastleSide::KingSide => rights.king_side = value,
            CastleSide::QueenSide => rights.queen_side = value,
        }
    }
}
