//! Core board state representation.
//!
//! `Position` is the central model: an 8x8 mailbox grid, side to move,
//! castling rights, en-passant target and the two move counters. Every
//! state-changing operation comes in two flavors: an in-place mutator taking
//! `&mut self`, and a pure `with_*`/`without_*` variant returning a new value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ParseError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, parse_placement};
use crate::utils::render_game_state::render_game_state;

pub type Grid = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    // [rank][file], rank 0 == rank 1.
    pub(crate) grid: Grid,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

/// Plain field-by-field snapshot of a [`Position`], for callers that build
/// or persist positions without going through FEN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub grid: Grid,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Board with no pieces, White to move, no rights.
    pub fn new_empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn new_game() -> Self {
        let mut position = Self::new_empty();
        for (file, kind) in [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ]
        .into_iter()
        .enumerate()
        {
            position.grid[0][file] = Some(Piece::new(kind, Color::White));
            position.grid[1][file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            position.grid[6][file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            position.grid[7][file] = Some(Piece::new(kind, Color::Black));
        }
        position.castling_rights = CastlingRights::ALL;
        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        parse_fen(fen)
    }

    /// Builds a position from the ranks field alone. White to move, no
    /// castling rights, no en-passant target, clocks at 0 and 1.
    pub fn from_placement(placement: &str) -> Result<Self, ParseError> {
        let mut position = Self::new_empty();
        position.grid = parse_placement(placement)?;
        Ok(position)
    }

    pub fn from_record(record: PositionRecord) -> Self {
        Self {
            grid: record.grid,
            side_to_move: record.side_to_move,
            castling_rights: record.castling_rights,
            en_passant_target: record.en_passant_target,
            halfmove_clock: record.halfmove_clock,
            fullmove_number: record.fullmove_number,
        }
    }

    pub fn to_record(&self) -> PositionRecord {
        PositionRecord {
            grid: self.grid,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn is_within_bounds(rank: i8, file: i8) -> bool {
        is_within_bounds(rank, file)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn castling_rights_for(&self, color: Color) -> SideCastlingRights {
        self.castling_rights.for_color(color)
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Squares holding a piece of `color`, rank 1 first.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_at(sq).is_some_and(|p| p.color == color))
    }

    pub fn put_piece(&mut self, square: Square, piece: Option<Piece>) -> &mut Self {
        self.grid[square.rank() as usize][square.file() as usize] = piece;
        self
    }

    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.rank() as usize][square.file() as usize].take()
    }

    pub fn set_side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    pub fn with_side_to_move(&self, color: Color) -> Self {
        let mut next = self.clone();
        next.set_side_to_move(color);
        next
    }

    /// Revokes one castling right, or both for `color` when `side` is `None`.
    pub fn revoke_castling_rights(&mut self, color: Color, side: Option<CastleSide>) -> &mut Self {
        self.castling_rights.revoke(color, side);
        self
    }

    pub fn without_castling_rights(&self, color: Color, side: Option<CastleSide>) -> Self {
        let mut next = self.clone();
        next.revoke_castling_rights(color, side);
        next
    }

    pub fn set_en_passant_target(&mut self, square: Option<Square>) -> &mut Self {
        self.en_passant_target = square;
        self
    }

    pub fn with_en_passant_target(&self, square: Option<Square>) -> Self {
        let mut next = self.clone();
        next.set_en_passant_target(square);
        next
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
